use gymnet_common::error::FitnessResult;

use super::{validate_measurement, Zone, ZoneSite};

#[derive(Debug, PartialEq)]
pub struct YogaZone {
    site: ZoneSite,
    /// Square metres.
    floor_area: f64,
    mat_material: String,
}

impl YogaZone {
    pub(super) fn new(site: ZoneSite, floor_area: f64, mat_material: &str) -> FitnessResult<Self> {
        let floor_area = validate_measurement(&site.id, "floor area", floor_area)?;
        Ok(Self {
            site,
            floor_area,
            mat_material: mat_material.to_string(),
        })
    }

    pub fn floor_area(&self) -> f64 {
        self.floor_area
    }

    pub fn set_floor_area(&mut self, floor_area: f64) -> FitnessResult<()> {
        self.floor_area = validate_measurement(&self.site.id, "floor area", floor_area)?;
        Ok(())
    }

    pub fn mat_material(&self) -> &str {
        &self.mat_material
    }

    pub fn set_mat_material(&mut self, mat_material: &str) {
        self.mat_material = mat_material.to_string();
    }
}

impl Zone for YogaZone {
    fn site(&self) -> &ZoneSite {
        &self.site
    }

    fn site_mut(&mut self) -> &mut ZoneSite {
        &mut self.site
    }

    fn facilities(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Floor area", format!("{} m²", self.floor_area)),
            ("Mat", self.mat_material.clone()),
        ]
    }
}
