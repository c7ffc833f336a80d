#![cfg(test)]
use gymnet_common::error::FitnessError;
use gymnet_common::fitness::zone::ZoneStatus;
use gymnet_core::session::SessionRegistry;
use gymnet_core::zone::{Cleanable, Zone, ZoneFactory};

use crate::util::{CENTER, ids, lifter, sample};

#[test]
fn duplicate_gym_keeps_the_first_usable() -> anyhow::Result<()> {
    let mut factory = ZoneFactory::new();
    let first = factory.gym("GYM001", 30, ZoneStatus::Open, 20, true)?;

    let second = factory.gym("GYM001", 20, ZoneStatus::Open, 10, true);
    assert!(matches!(second, Err(FitnessError::DuplicateZoneId(id)) if id == "GYM001"));

    let trainer = lifter();
    assert!(trainer.work_in_zone(&*first.borrow()).is_ok());
    first.borrow_mut().prepare_zone();
    assert_eq!(first.borrow().status(), ZoneStatus::Cleaning);
    Ok(())
}

#[test]
fn every_variant_shares_one_identifier_space() {
    for (taken, attempt) in [(0, 1), (1, 2), (2, 0)] {
        let mut factory = ZoneFactory::new();
        assert!(build(&mut factory, taken, "Z1").is_ok());

        let clash = build(&mut factory, attempt, "Z1");
        assert!(matches!(clash, Err(FitnessError::DuplicateZoneId(_))));
    }
}

fn build(factory: &mut ZoneFactory, variant: u8, id: &str) -> Result<(), FitnessError> {
    match variant {
        0 => factory.gym(id, 10, ZoneStatus::Open, 1, true).map(|_| ()),
        1 => factory.yoga(id, 10, ZoneStatus::Open, 30.0, "Cork").map(|_| ()),
        _ => factory.pool(id, 10, ZoneStatus::Open, 25.0, 2.0).map(|_| ()),
    }
}

#[test]
fn removed_zone_does_not_free_its_identifier() -> anyhow::Result<()> {
    let mut sample = sample()?;
    let center = sample.network.center_mut(CENTER).expect("sample center");

    center.remove_zone(&*sample.pool.borrow())?;
    assert_eq!(ids(center.zones()), vec!["GYM001", "YOGA001"]);

    let again = sample.factory.pool("POOL001", 20, ZoneStatus::Open, 25.0, 1.5);
    assert!(matches!(again, Err(FitnessError::DuplicateZoneId(_))));
    Ok(())
}

#[test]
fn session_identifiers_are_unique() -> anyhow::Result<()> {
    let mut sessions = SessionRegistry::new();
    sessions.schedule("SES001", "2024-01-20 10:00", 10)?;

    let clash = sessions.schedule("SES001", "2024-02-01 09:30", 12);
    assert!(matches!(clash, Err(FitnessError::DuplicateSessionId(_))));
    assert_eq!(sessions.registry().len(), 1);
    Ok(())
}
