use crate::terminal::colors;
use colored::*;
use gymnet_common::fitness::zone::ZoneStatus;
use gymnet_core::trainer::Trainer;
use gymnet_core::zone::Zone;

pub type Detail = (String, ColoredString);

pub fn status_to_colored(status: ZoneStatus) -> ColoredString {
    match status {
        ZoneStatus::Open => status.label().color(colors::STATUS_OPEN).bold(),
        ZoneStatus::Cleaning => status.label().color(colors::STATUS_CLEANING).bold(),
    }
}

/// Shared zone attributes first, then whatever the variant adds.
pub fn zone_to_details(zone: &dyn Zone) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        (String::from("Type"), zone.zone_type().label().normal()),
        (String::from("Capacity"), zone.capacity().to_string().normal()),
        (String::from("Status"), status_to_colored(zone.status())),
    ];

    details.extend(
        zone.facilities()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.normal())),
    );

    details
}

pub fn trainer_to_details(trainer: &Trainer) -> Vec<Detail> {
    let years: &str = if trainer.experience_years() == 1 { "year" } else { "years" };
    vec![
        (String::from("Focus"), trainer.specialization().label().normal()),
        (
            String::from("Experience"),
            format!("{} {years}", trainer.experience_years()).normal(),
        ),
    ]
}
