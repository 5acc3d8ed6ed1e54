/// Ions, reagents and the configuration they are built from.
/// The catalog is created once and then only read by the engines.
#[allow(non_snake_case)]
pub mod Catalogs;
/// eng
/// Rule engines that decide what happens when two reagents are mixed:
/// 1) hand-authored reactions and acid–base rules
/// 2) redox: best oxidizer against best reductor, balanced through the least common multiple of electrons
/// 3) precipitation by solubility rules
/// 4) otherwise a physical mixture
#[allow(non_snake_case)]
pub mod Reactions;
pub mod chem_errors;
pub mod cli;
