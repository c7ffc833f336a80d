use gymnet_common::error::FitnessResult;

use super::{validate_measurement, Zone, ZoneSite};

/// Lengths are in metres.
#[derive(Debug, PartialEq)]
pub struct PoolZone {
    site: ZoneSite,
    length: f64,
    depth: f64,
}

impl PoolZone {
    pub(super) fn new(site: ZoneSite, length: f64, depth: f64) -> FitnessResult<Self> {
        let length = validate_measurement(&site.id, "length", length)?;
        let depth = validate_measurement(&site.id, "depth", depth)?;
        Ok(Self {
            site,
            length,
            depth,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_length(&mut self, length: f64) -> FitnessResult<()> {
        self.length = validate_measurement(&self.site.id, "length", length)?;
        Ok(())
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: f64) -> FitnessResult<()> {
        self.depth = validate_measurement(&self.site.id, "depth", depth)?;
        Ok(())
    }
}

impl Zone for PoolZone {
    fn site(&self) -> &ZoneSite {
        &self.site
    }

    fn site_mut(&mut self) -> &mut ZoneSite {
        &mut self.site
    }

    fn facilities(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Length", format!("{} m", self.length)),
            ("Depth", format!("{} m", self.depth)),
        ]
    }
}
