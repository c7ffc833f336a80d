//! House rules posted in every center of the network.

const FITNESS_RULES: [&str; 10] = [
    "1. Follow hygiene rules: use a towel on the machines and wipe them down after use.",
    "2. Return sports equipment to its place after use.",
    "3. Do not leave personal belongings in the training zones.",
    "4. Wear suitable sportswear and shoes.",
    "5. Respect other visitors and do not make noise.",
    "6. Follow the instructions of trainers and staff.",
    "7. Do not self-medicate; consult a doctor before starting to train.",
    "8. Report any injury or feeling unwell to the staff immediately.",
    "9. Entering the gym under the influence of alcohol or drugs is not allowed.",
    "10. Follow the safety rules when working with machines.",
];

/// Returns the fixed, ordered list of house rules.
pub fn get_fitness_rules() -> &'static [&'static str] {
    &FITNESS_RULES
}
