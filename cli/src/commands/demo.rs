use anyhow::Context;
use colored::*;
use tracing::{error, info, warn};

use crate::mprint;
use crate::terminal::{colors, format, print};
use gymnet_common::config::Config;
use gymnet_common::error::FitnessResult;
use gymnet_common::fitness::{trainer::Specialization, zone::ZoneStatus};
use gymnet_core::center::FitnessCenter;
use gymnet_core::network::FitnessNetwork;
use gymnet_core::session::SessionRegistry;
use gymnet_core::trainer::Trainer;
use gymnet_core::zone::{Cleanable, GymZone, PoolZone, Shared, SharedZone, YogaZone, Zone, ZoneFactory};

const CENTER_NAME: &str = "Downtown";
const BRANCH_NAME: &str = "Riverside";

struct SampleZones {
    gym: Shared<GymZone>,
    yoga: Shared<YogaZone>,
    pool: Shared<PoolZone>,
}

struct SampleTrainers {
    lifter: Trainer,
    yogi: Trainer,
    swimmer: Trainer,
}

/// Builds a one-center network and exercises every operation of the model,
/// printing results and the errors it runs into along the way.
pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let mut factory = ZoneFactory::new();

    print::header("building zones", cfg.quiet);
    let zones: SampleZones = match build_zones(&mut factory) {
        Ok(zones) => zones,
        Err(e) => {
            error!("Failed to create zone: {e}");
            return Ok(());
        }
    };
    print::print_status(format!("{} zones ready", factory.registry().len()));

    let trainers: SampleTrainers = SampleTrainers {
        lifter: Trainer::new("Ivan Ivanov", Specialization::Powerlifting, 5),
        yogi: Trainer::new("Maria Smirnova", Specialization::Yoga, 3),
        swimmer: Trainer::new("Peter Petrov", Specialization::Swimming, 7),
    };

    let center_zones: Vec<SharedZone> = vec![zones.gym.clone(), zones.yoga.clone(), zones.pool.clone()];
    let staff: Vec<Trainer> = vec![
        trainers.lifter.clone(),
        trainers.yogi.clone(),
        trainers.swimmer.clone(),
    ];
    let center = FitnessCenter::with_staff(CENTER_NAME, center_zones, staff)?;
    let mut network = FitnessNetwork::with_centers(vec![center]);

    let removed = manage_zones(&mut network, &mut factory, cfg)?;
    manage_centers(&mut network, cfg);
    list_center(&network, cfg)?;
    start_shift(&trainers, &zones, cfg);
    schedule_sessions(&mut network, &zones, cfg);
    place_trainers(&network, &trainers, &zones, removed.as_ref(), cfg);
    reuse_identifier(&mut factory, cfg);
    super::rules::rules(cfg);
    cycle_status(&zones, cfg);

    summary(&factory, &network, cfg);
    Ok(())
}

fn build_zones(factory: &mut ZoneFactory) -> FitnessResult<SampleZones> {
    Ok(SampleZones {
        gym: factory.gym("GYM001", 30, ZoneStatus::Open, 20, true)?,
        yoga: factory.yoga("YOGA001", 15, ZoneStatus::Open, 50.0, "Jute")?,
        pool: factory.pool("POOL001", 20, ZoneStatus::Open, 25.0, 1.5)?,
    })
}

/// Adds and removes a second gym. The removed zone is handed back so later steps
/// can show that it no longer belongs to the network.
fn manage_zones(
    network: &mut FitnessNetwork,
    factory: &mut ZoneFactory,
    cfg: &Config,
) -> anyhow::Result<Option<Shared<GymZone>>> {
    print::header("zone management", cfg.quiet);

    let center = network
        .center_mut(CENTER_NAME)
        .context("sample center is missing from the network")?;

    let extra = match factory.gym("GYM002", 25, ZoneStatus::Open, 15, false) {
        Ok(zone) => zone,
        Err(e) => {
            warn!("Failed to add zone: {e}");
            return Ok(None);
        }
    };

    match center.add_zone(extra.clone()) {
        Ok(()) => print::print_status("Zone GYM002 successfully added"),
        Err(e) => warn!("Failed to add zone: {e}"),
    }

    match center.remove_zone(&*extra.borrow()) {
        Ok(_) => print::print_status("Zone GYM002 successfully removed"),
        Err(e) => warn!("Failed to remove zone: {e}"),
    }

    // a second removal has nothing left to remove
    if let Err(e) = center.remove_zone(&*extra.borrow()) {
        print::print_status(format!("Expected error: {e}"));
    }

    Ok(Some(extra))
}

fn manage_centers(network: &mut FitnessNetwork, cfg: &Config) {
    print::header("center management", cfg.quiet);

    network.add_center(FitnessCenter::new(BRANCH_NAME));
    print::print_status(format!(
        "Center {BRANCH_NAME} joined, the network now has {} centers",
        network.centers().len()
    ));

    match network.remove_center(BRANCH_NAME) {
        Ok(center) => print::print_status(format!("Center {} left the network", center.name())),
        Err(e) => warn!("Failed to remove center: {e}"),
    }

    if let Err(e) = network.remove_center(BRANCH_NAME) {
        print::print_status(format!("Expected error: {e}"));
    }
}

fn list_center(network: &FitnessNetwork, cfg: &Config) -> anyhow::Result<()> {
    let center = network
        .center(CENTER_NAME)
        .context("sample center is missing from the network")?;

    print::header("available zones", cfg.quiet);
    let available: Vec<SharedZone> = center.get_available_zones();
    for (idx, zone) in available.iter().enumerate() {
        let zone = zone.borrow();
        print::tree_head(idx, zone.id());
        print::as_tree_one_level(format::zone_to_details(&*zone));
        if idx + 1 != available.len() {
            mprint!();
        }
    }

    print::header("staff", cfg.quiet);
    for (idx, trainer) in center.trainers().iter().enumerate() {
        print::tree_head(idx, trainer.full_name());
        print::as_tree_one_level(format::trainer_to_details(trainer));
        if idx + 1 != center.trainers().len() {
            mprint!();
        }
    }

    Ok(())
}

fn start_shift(trainers: &SampleTrainers, zones: &SampleZones, cfg: &Config) {
    print::header("trainer shifts", cfg.quiet);

    match trainers.lifter.work_in_zone(&*zones.gym.borrow()) {
        Ok(msg) => print::print_status(msg),
        Err(e) => warn!("Error: {e}"),
    }
}

fn schedule_sessions(network: &mut FitnessNetwork, zones: &SampleZones, cfg: &Config) {
    print::header("training sessions", cfg.quiet);

    let mut sessions = SessionRegistry::new();
    match sessions.schedule("SES001", "2024-01-20 10:00", 10) {
        Ok(session) => match network.assign_session_to_zone(session, &*zones.gym.borrow()) {
            Ok(msg) => print::print_status(msg),
            Err(e) => warn!("Error: {e}"),
        },
        Err(e) => warn!("Error: {e}"),
    }

    match sessions.schedule("SES001", "2024-01-21 18:00", 8) {
        Ok(_) => error!("A session with an existing identifier was scheduled"),
        Err(e) => print::print_status(format!("Expected error: {e}")),
    }

    {
        let mut yoga = zones.yoga.borrow_mut();
        yoga.prepare_zone();
        match sessions.schedule("SES002", "2024-01-20 12:00", 6) {
            Ok(session) => match network.assign_session_to_zone(session, &*yoga) {
                Ok(_) => error!("A session was assigned to zone {} during cleaning", yoga.id()),
                Err(e) => print::print_status(format!("Expected error: {e}")),
            },
            Err(e) => warn!("Error: {e}"),
        }
        yoga.clean_zone();
    }

    let gym = zones.gym.borrow();
    match network.get_session_for_zone(&*gym) {
        Some(session) => print::print_status(format!(
            "Session assigned to zone {}: {}",
            gym.id(),
            session.get_session_info()
        )),
        None => print::print_status(format!("No sessions are assigned to zone {}", gym.id())),
    }
}

fn place_trainers(
    network: &FitnessNetwork,
    trainers: &SampleTrainers,
    zones: &SampleZones,
    removed: Option<&Shared<GymZone>>,
    cfg: &Config,
) {
    print::header("trainer placement", cfg.quiet);

    for trainer in [&trainers.lifter, &trainers.swimmer] {
        match network.assign_trainer(trainer, &*zones.gym.borrow()) {
            Ok(msg) => print::print_status(msg),
            Err(e) => warn!("Failed to assign trainer: {e}"),
        }
    }

    // the zone dropped during zone management is no longer part of any center
    if let Some(zone) = removed {
        match network.assign_trainer(&trainers.lifter, &*zone.borrow()) {
            Ok(_) => error!("A trainer was placed in a zone outside the network"),
            Err(e) => print::print_status(format!("Expected error: {e}")),
        }
    }
}

fn reuse_identifier(factory: &mut ZoneFactory, cfg: &Config) {
    print::header("identifier reuse", cfg.quiet);

    match factory.gym("GYM001", 20, ZoneStatus::Open, 10, true) {
        Ok(_) => error!("A zone with an existing identifier was created"),
        Err(e) => print::print_status(format!("Expected error: {e}")),
    }
}

fn cycle_status(zones: &SampleZones, cfg: &Config) {
    let mut gym = zones.gym.borrow_mut();
    print::header(&format!("zone {} lifecycle", gym.id()), cfg.quiet);

    print::set_key_width(["Current", "After prepare", "After cleaning"]);
    print::aligned_line("Current", format::status_to_colored(gym.status()));
    gym.prepare_zone();
    print::aligned_line("After prepare", format::status_to_colored(gym.status()));
    gym.clean_zone();
    print::aligned_line("After cleaning", format::status_to_colored(gym.status()));
}

fn summary(factory: &ZoneFactory, network: &FitnessNetwork, cfg: &Config) {
    let registry = factory.registry();
    let claimed: String = if registry.is_empty() {
        String::from("none")
    } else {
        registry.iter().collect::<Vec<_>>().join(", ")
    };
    print::print_status(format!("Identifiers claimed so far: {claimed}"));

    let zones: ColoredString = format!("{} zones", registry.len()).bold().green();
    let sessions: ColoredString = format!("{} sessions", network.zone_sessions().count()).bold().yellow();
    let output: ColoredString =
        format!("Demo complete: {zones} registered, {sessions} assigned").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            info!("{}", output)
        }
    }
}
