use gymnet_common::{config::Config, policies};

use crate::terminal::print;

pub fn rules(cfg: &Config) {
    print::header("fitness center rules", cfg.quiet);
    for rule in policies::get_fitness_rules() {
        print::print_status(*rule);
    }
}
