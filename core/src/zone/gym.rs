use gymnet_common::error::FitnessResult;

use super::{Zone, ZoneSite};

#[derive(Debug, PartialEq)]
pub struct GymZone {
    site: ZoneSite,
    machines: u32,
    ventilation: bool,
}

impl GymZone {
    pub(super) fn new(site: ZoneSite, machines: u32, ventilation: bool) -> Self {
        Self {
            site,
            machines,
            ventilation,
        }
    }

    pub fn machines(&self) -> u32 {
        self.machines
    }

    pub fn set_machines(&mut self, machines: u32) {
        self.machines = machines;
    }

    pub fn has_ventilation(&self) -> bool {
        self.ventilation
    }

    pub fn set_ventilation(&mut self, ventilation: bool) {
        self.ventilation = ventilation;
    }
}

impl Zone for GymZone {
    fn site(&self) -> &ZoneSite {
        &self.site
    }

    fn site_mut(&mut self) -> &mut ZoneSite {
        &mut self.site
    }

    fn facilities(&self) -> Vec<(&'static str, String)> {
        let ventilation = if self.ventilation { "yes" } else { "no" };
        vec![
            ("Machines", self.machines.to_string()),
            ("Ventilation", ventilation.to_string()),
        ]
    }
}
