/// interactive numbered menu of the `reactlab` binary
pub mod cli_main;
/// prettytable views of reagents, ions, solubility and reaction results
pub mod cli_tables;
