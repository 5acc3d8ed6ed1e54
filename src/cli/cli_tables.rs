use crate::Catalogs::ions::{IonCatalog, to_display_formula};
use crate::Catalogs::reagents::Reagent;
use crate::Reactions::reaction_result::ReactionResult;
use crate::Reactions::solubility::is_insoluble;
use prettytable::{Cell, Row, Table, row};

pub fn reagents_table(reagents: &[&Reagent]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Id", "Name", "Formula", "State", "Category", "Redox"]);
    for r in reagents {
        table.add_row(Row::new(vec![
            Cell::new(&r.id),
            Cell::new(&r.name),
            Cell::new(&to_display_formula(&r.formula)),
            Cell::new(r.state.mark()),
            Cell::new(&r.category.to_string()),
            Cell::new(if r.is_redox_active() { "yes" } else { "" }),
        ]));
    }
    table
}

pub fn ions_table(ions: &IonCatalog) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Id", "Formula", "Charge", "Name", "Redox couples"]);
    for ion in ions.cations().chain(ions.anions()) {
        let couples: Vec<String> = ion
            .redox
            .iter()
            .map(|e| format!("{} ({:+.2} V)", e.half_reaction, e.v0))
            .collect();
        table.add_row(Row::new(vec![
            Cell::new(&ion.id),
            Cell::new(&ion.formula),
            Cell::new(&format!("{:+}", ion.charge)),
            Cell::new(&ion.name),
            Cell::new(&couples.join("\n")),
        ]));
    }
    table
}

/// cations as rows, anions as columns; "s" marks an insoluble salt
pub fn solubility_table(ions: &IonCatalog) -> Table {
    let mut table = Table::new();
    let mut header = vec![Cell::new("")];
    header.extend(ions.anions().map(|a| Cell::new(&a.formula)));
    table.add_row(Row::new(header));
    for cation in ions.cations() {
        let mut cells = vec![Cell::new(&cation.formula)];
        cells.extend(ions.anions().map(|anion| {
            Cell::new(if is_insoluble(&cation.id, &anion.id) { "s" } else { "aq" })
        }));
        table.add_row(Row::new(cells));
    }
    table
}

pub fn reaction_table(result: &ReactionResult) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Reactants", result.reactants.join(" + ")]);
    table.add_row(row!["Type", result.reaction_type.to_string()]);
    table.add_row(row!["Equation", result.equation]);
    table.add_row(row!["Products", result.products]);
    table.add_row(row!["Observation", result.observation]);
    if let Some(color) = &result.color {
        table.add_row(row!["Colour", color]);
    }
    table
}

pub fn print_reagents(reagents: &[&Reagent]) {
    println!("____________________REAGENTS_________________________");
    reagents_table(reagents).printstd();
}

pub fn print_ions(ions: &IonCatalog) {
    println!("____________________IONS_________________________");
    ions_table(ions).printstd();
}

pub fn print_solubility(ions: &IonCatalog) {
    println!("____________________SOLUBILITY (s = precipitate)_________________________");
    solubility_table(ions).printstd();
}

pub fn print_reaction(result: &ReactionResult) {
    println!("____________________REACTION_________________________");
    reaction_table(result).printstd();
}
