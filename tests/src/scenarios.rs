#![cfg(test)]
use gymnet_common::error::FitnessError;
use gymnet_common::fitness::zone::ZoneStatus;
use gymnet_common::policies;
use gymnet_core::session::SessionRegistry;
use gymnet_core::zone::{Cleanable, ZoneFactory};

use crate::util::{CENTER, ids, lifter, sample, swimmer, yogi};

/*************************************************************
                    Center membership
**************************************************************/

#[test]
fn removing_a_never_added_zone_fails() -> anyhow::Result<()> {
    let mut sample = sample()?;
    let outsider = sample.factory.gym("GYM002", 25, ZoneStatus::Open, 15, false)?;
    let center = sample.network.center_mut(CENTER).expect("sample center");

    let res = center.remove_zone(&*outsider.borrow());

    assert!(matches!(res, Err(FitnessError::ZoneNotInCenter(id)) if id == "GYM002"));
    assert_eq!(ids(center.zones()), vec!["GYM001", "YOGA001", "POOL001"]);
    Ok(())
}

#[test]
fn add_then_remove_restores_the_center() -> anyhow::Result<()> {
    let mut sample = sample()?;
    let extra = sample.factory.gym("GYM002", 25, ZoneStatus::Open, 15, false)?;
    let center = sample.network.center_mut(CENTER).expect("sample center");

    center.add_zone(extra.clone())?;
    assert_eq!(center.zones().len(), 4);
    assert!(matches!(center.add_zone(extra.clone()), Err(FitnessError::ZoneAlreadyInCenter(_))));

    center.remove_zone(&*extra.borrow())?;
    assert_eq!(ids(center.zones()), vec!["GYM001", "YOGA001", "POOL001"]);
    Ok(())
}

#[test]
fn cleaning_hides_a_zone_from_availability() -> anyhow::Result<()> {
    let sample = sample()?;
    sample.yoga.borrow_mut().prepare_zone();

    let center = sample.network.center(CENTER).expect("sample center");
    assert_eq!(ids(&center.get_available_zones()), vec!["GYM001", "POOL001"]);

    sample.yoga.borrow_mut().clean_zone();
    assert_eq!(ids(&center.get_available_zones()), vec!["GYM001", "YOGA001", "POOL001"]);
    Ok(())
}

/*************************************************************
                  Shifts and trainer placement
**************************************************************/

#[test]
fn shift_fails_only_while_cleaning() -> anyhow::Result<()> {
    let sample = sample()?;
    let trainer = yogi();

    for zone in [&sample.gym, &sample.yoga, &sample.pool] {
        assert!(trainer.work_in_zone(&*zone.borrow()).is_ok());

        zone.borrow_mut().prepare_zone();
        let res = trainer.work_in_zone(&*zone.borrow());
        assert!(matches!(res, Err(FitnessError::ZoneUnavailable(_))));

        zone.borrow_mut().clean_zone();
        assert!(trainer.work_in_zone(&*zone.borrow()).is_ok());
    }
    Ok(())
}

#[test]
fn swimmer_cannot_take_the_gym() -> anyhow::Result<()> {
    let sample = sample()?;

    let res = sample.network.assign_trainer(&swimmer(), &*sample.gym.borrow());
    assert!(matches!(res, Err(FitnessError::SpecializationMismatch { .. })));
    Ok(())
}

#[test]
fn matched_trainers_get_the_shift_message() -> anyhow::Result<()> {
    let sample = sample()?;

    for (trainer, zone) in [
        (lifter(), &sample.gym),
        (yogi(), &sample.yoga),
        (swimmer(), &sample.pool),
    ] {
        let placed = sample.network.assign_trainer(&trainer, &*zone.borrow())?;
        assert_eq!(placed, trainer.work_in_zone(&*zone.borrow())?);
    }
    Ok(())
}

#[test]
fn membership_is_checked_before_specialization() -> anyhow::Result<()> {
    let mut sample = sample()?;
    let stray = sample.factory.pool("POOL404", 8, ZoneStatus::Open, 12.5, 1.2)?;

    // wrong specialization as well, but the zone is not in the network
    let res = sample.network.assign_trainer(&lifter(), &*stray.borrow());
    assert!(matches!(res, Err(FitnessError::ZoneNotInNetwork(_))));
    Ok(())
}

#[test]
fn lookalike_zone_from_another_factory_is_rejected() -> anyhow::Result<()> {
    let sample = sample()?;
    let mut other_factory = ZoneFactory::new();
    let lookalike = other_factory.gym("GYM001", 30, ZoneStatus::Open, 20, true)?;

    let res = sample.network.assign_trainer(&lifter(), &*lookalike.borrow());
    assert!(matches!(res, Err(FitnessError::ZoneNotInNetwork(id)) if id == "GYM001"));

    let center = sample.network.center(CENTER).expect("sample center");
    assert!(!center.contains_zone(&*lookalike.borrow()));
    assert!(center.contains_zone(&*sample.gym.borrow()));
    Ok(())
}

#[test]
fn caller_may_hold_a_mutable_borrow_of_a_member() -> anyhow::Result<()> {
    let mut sample = sample()?;
    let mut gym = sample.gym.borrow_mut();

    let center = sample.network.center(CENTER).expect("sample center");
    assert!(center.contains_zone(&*gym));
    assert!(sample.network.assign_trainer(&lifter(), &*gym).is_ok());

    gym.prepare_zone();
    let res = sample.network.assign_trainer(&lifter(), &*gym);
    assert!(matches!(res, Err(FitnessError::ZoneUnavailable(_))));

    let center = sample.network.center_mut(CENTER).expect("sample center");
    center.remove_zone(&*gym)?;
    assert!(!center.contains_zone(&*gym));
    Ok(())
}

/*************************************************************
                       Session assignment
**************************************************************/

#[test]
fn last_session_assignment_wins() -> anyhow::Result<()> {
    let mut sample = sample()?;
    let mut sessions = SessionRegistry::new();
    let morning = sessions.schedule("SES001", "2024-01-20 10:00", 10)?;
    let evening = sessions.schedule("SES002", "2024-01-20 19:00", 14)?;

    sample.network.assign_session_to_zone(morning, &*sample.pool.borrow())?;
    sample.network.assign_session_to_zone(evening.clone(), &*sample.pool.borrow())?;

    assert_eq!(sample.network.get_session_for_zone(&*sample.pool.borrow()), Some(&evening));
    assert!(sample.network.get_session_for_zone(&*sample.gym.borrow()).is_none());
    Ok(())
}

#[test]
fn session_is_refused_while_zone_is_cleaned() -> anyhow::Result<()> {
    let mut sample = sample()?;
    let mut sessions = SessionRegistry::new();
    let session = sessions.schedule("SES001", "2024-01-20 10:00", 10)?;

    sample.gym.borrow_mut().prepare_zone();
    let res = sample.network.assign_session_to_zone(session, &*sample.gym.borrow());

    assert!(matches!(res, Err(FitnessError::ZoneUnavailable(_))));
    assert_eq!(sample.network.zone_sessions().count(), 0);
    Ok(())
}

/*************************************************************
                            Policies
**************************************************************/

#[test]
fn ten_rules_in_a_fixed_order() {
    let rules = policies::get_fitness_rules();
    assert_eq!(rules.len(), 10);
    assert!(rules[0].starts_with("1. "));
    assert!(rules[9].starts_with("10. "));
}
