#![cfg(test)]
use gymnet_common::fitness::{trainer::Specialization, zone::ZoneStatus};
use gymnet_core::center::FitnessCenter;
use gymnet_core::network::FitnessNetwork;
use gymnet_core::trainer::Trainer;
use gymnet_core::zone::{SharedZone, ZoneFactory};

pub struct Sample {
    pub factory: ZoneFactory,
    pub network: FitnessNetwork,
    pub gym: SharedZone,
    pub yoga: SharedZone,
    pub pool: SharedZone,
}

pub const CENTER: &str = "Downtown";

/// One center holding GYM001, YOGA001 and POOL001, all open.
pub fn sample() -> anyhow::Result<Sample> {
    let mut factory = ZoneFactory::new();
    let gym: SharedZone = factory.gym("GYM001", 30, ZoneStatus::Open, 20, true)?;
    let yoga: SharedZone = factory.yoga("YOGA001", 15, ZoneStatus::Open, 50.0, "Jute")?;
    let pool: SharedZone = factory.pool("POOL001", 20, ZoneStatus::Open, 25.0, 1.5)?;

    let center = FitnessCenter::with_staff(
        CENTER,
        vec![gym.clone(), yoga.clone(), pool.clone()],
        vec![lifter(), yogi(), swimmer()],
    )?;

    Ok(Sample {
        factory,
        network: FitnessNetwork::with_centers(vec![center]),
        gym,
        yoga,
        pool,
    })
}

pub fn lifter() -> Trainer {
    Trainer::new("Ivan Ivanov", Specialization::Powerlifting, 5)
}

pub fn yogi() -> Trainer {
    Trainer::new("Maria Smirnova", Specialization::Yoga, 3)
}

pub fn swimmer() -> Trainer {
    Trainer::new("Peter Petrov", Specialization::Swimming, 7)
}

pub fn ids(zones: &[SharedZone]) -> Vec<String> {
    zones.iter().map(|z| z.borrow().id().to_string()).collect()
}
