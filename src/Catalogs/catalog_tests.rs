///////////////////////TESTS////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Catalogs::Catalog;
    use crate::Catalogs::catalog_config::CatalogConfig;
    use crate::Catalogs::ions::{IonCatalog, RedoxType};
    use crate::Catalogs::reagents::{Category, PhysicalState};
    use crate::chem_errors::ChemError;
    use std::collections::HashSet;
    use tempfile::NamedTempFile;

    #[test]
    fn test_standard_ions_have_nonzero_charge() {
        let ions = IonCatalog::standard();
        assert!(ions.cations().all(|i| i.charge > 0));
        assert!(ions.anions().all(|i| i.charge < 0));
        assert_eq!(ions.cations().count(), 17);
        assert_eq!(ions.anions().count(), 15);
    }

    #[test]
    fn test_standard_redox_texts_match_structured_form() {
        let catalog = Catalog::standard();
        let ion_entries = catalog
            .ions()
            .cations()
            .chain(catalog.ions().anions())
            .flat_map(|i| i.redox.iter());
        let reagent_entries = catalog.reagents().iter().flat_map(|r| r.redox.iter());
        for entry in ion_entries.chain(reagent_entries) {
            assert!(entry.structured.electrons > 0);
            assert!(
                entry.text_matches_structure().unwrap(),
                "mismatch in {}",
                entry.half_reaction
            );
        }
    }

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = Catalog::standard();
        let hcl = catalog.reagent("hcl").unwrap();
        assert_eq!(hcl.formula, "HCl");
        assert_eq!(hcl.category, Category::Acid);
        let h2so4 = catalog.reagent("hso4").unwrap();
        assert_eq!(h2so4.formula, "H2SO4");
        assert_eq!(catalog.reagent("baoh").unwrap().formula, "Ba(OH)2");
        assert_eq!(catalog.reagent("fe3no3").unwrap().formula, "Fe(NO3)3");
        assert_eq!(catalog.reagent("nh4no3").unwrap().formula, "NH4NO3");
        assert_eq!(catalog.reagent("naco3").unwrap().formula, "Na2CO3");
        let mg = catalog.reagent("mg_s").unwrap();
        assert_eq!(mg.state, PhysicalState::Solid);
        assert_eq!(mg.redox[0].role, RedoxType::Reductor);
        let water = catalog.reagent("h2o_l").unwrap();
        assert_eq!(water.redox[0].role, RedoxType::Both);
    }

    #[test]
    fn test_reagent_ids_are_unique_and_ordered() {
        let catalog = Catalog::standard();
        let ids: Vec<&str> = catalog.reagents().iter().map(|r| r.id.as_str()).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), catalog.reagents().len());
        // generated bottles come first
        assert_eq!(ids[0], "hcl");
    }

    #[test]
    fn test_require_unknown_reagent() {
        let catalog = Catalog::standard();
        assert!(matches!(
            catalog.require("dragon_blood"),
            Err(ChemError::UnknownReagent(id)) if id == "dragon_blood"
        ));
    }

    #[test]
    fn test_catalog_from_json_files() {
        let ions_file = NamedTempFile::new().unwrap();
        let table = IonCatalog::standard().to_table();
        std::fs::write(ions_file.path(), serde_json::to_string(&table).unwrap()).unwrap();
        let ions = IonCatalog::from_json_file(ions_file.path()).unwrap();
        assert_eq!(ions.len(), IonCatalog::standard().len());

        let config_file = NamedTempFile::new().unwrap();
        std::fs::write(
            config_file.path(),
            r#"{ "bottles": [ { "cation": "Ag", "anion": "NO3", "category": "salt" },
                              { "cation": "Ag", "anion": "Xx", "category": "salt" } ] }"#,
        )
        .unwrap();
        let config = CatalogConfig::from_json_file(config_file.path()).unwrap();
        let catalog = Catalog::build(ions, &config);
        assert_eq!(catalog.reagents().len(), 1);
        assert_eq!(catalog.reagent("agno3").unwrap().formula, "AgNO3");
    }

    #[test]
    fn test_catalog_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
