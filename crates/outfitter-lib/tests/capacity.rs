mod common;

use outfitter_lib::ship::Attribute;
use outfitter_lib::validator::{is_valid, UNBOUNDED};
use outfitter_lib::{
    add_outfit, max_units_to_add, max_units_to_remove, units_to_add, violations, AmmoCascade,
    Build, Constraint, LimitingFactor, Outfit, OutfitId, OutfitSet, Removal,
};

use common::{default_build, empty_build, fixture_catalog, outfit, units};

fn apply(build: Build, outfit: &Outfit, amount: u32) -> Build {
    let change = add_outfit(&build, outfit, units(amount)).expect("add should fit");
    build.with_outfits(change.outfits)
}

#[test]
fn add_is_limited_by_outfit_space() {
    let catalog = fixture_catalog();
    let armor = outfit(&catalog, "armor-plate");
    let build = empty_build(&catalog, "sparrow");

    assert_eq!(max_units_to_add(&build, armor), Ok(3));

    let build = apply(build, armor, 3);
    assert_eq!(
        max_units_to_add(&build, armor),
        Err(LimitingFactor {
            constraint: Constraint::Attribute {
                attribute: Attribute::OutfitSpace
            },
            remaining: 10.0,
            required: 30.0,
        })
    );
}

#[test]
fn outfit_consuming_nothing_is_unbounded() {
    let catalog = fixture_catalog();
    let plating: Outfit =
        serde_json::from_str(r#"{"id": "paint", "name": "Paint", "hull": 1}"#).unwrap();
    let build = empty_build(&catalog, "sparrow");
    assert_eq!(max_units_to_add(&build, &plating), Ok(UNBOUNDED));
}

#[test]
fn provided_attributes_never_limit_an_add() {
    let catalog = fixture_catalog();
    let expansion = outfit(&catalog, "outfit-expansion");
    let build = empty_build(&catalog, "sparrow");

    // Limited only by the cargo space it consumes.
    assert_eq!(max_units_to_add(&build, expansion), Ok(1));
}

#[test]
fn ammunition_is_limited_by_its_pool() {
    let catalog = fixture_catalog();
    let missile = outfit(&catalog, "meteor-missile");
    let build = apply(
        empty_build(&catalog, "mule"),
        outfit(&catalog, "meteor-launcher"),
        1,
    );

    assert_eq!(max_units_to_add(&build, missile), Ok(20));
    assert_eq!(units_to_add(&build, missile, units(25)), Ok(20));
    assert_eq!(units_to_add(&build, missile, units(5)), Ok(5));
}

#[test]
fn ammunition_without_storage_is_blocked() {
    let catalog = fixture_catalog();
    let missile = outfit(&catalog, "meteor-missile");
    let build = empty_build(&catalog, "mule");

    assert_eq!(
        max_units_to_add(&build, missile),
        Err(LimitingFactor {
            constraint: Constraint::AmmoCapacity {
                ammo: OutfitId::new("meteor-missile")
            },
            remaining: 0.0,
            required: 1.0,
        })
    );
}

#[test]
fn max_add_never_increases_as_space_fills() {
    let catalog = fixture_catalog();
    let armor = outfit(&catalog, "armor-plate");
    let mut build = empty_build(&catalog, "mule");
    let mut previous = u32::MAX;

    while let Ok(max_units) = max_units_to_add(&build, armor) {
        assert!(max_units <= previous);
        previous = max_units;
        build = apply(build, armor, 1);
    }
    assert_eq!(build.amount_of(&armor.id), 6);
}

#[test]
fn removing_absent_outfit_reports_stock() {
    let catalog = fixture_catalog();
    let build = empty_build(&catalog, "sparrow");
    let armor = outfit(&catalog, "armor-plate");

    match max_units_to_remove(&build, armor, units(1)) {
        Err(LimitingFactor {
            constraint: Constraint::Stock { outfit },
            remaining,
            required,
        }) => {
            assert_eq!(outfit, armor.id);
            assert_eq!((remaining, required), (0.0, 1.0));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn removal_is_capped_at_stock() {
    let catalog = fixture_catalog();
    let armor = outfit(&catalog, "armor-plate");
    let build = apply(empty_build(&catalog, "sparrow"), armor, 2);

    assert_eq!(
        max_units_to_remove(&build, armor, units(9)),
        Ok(Removal::Units { amount: 2 })
    );
}

#[test]
fn removing_a_provider_is_limited_by_what_it_provides() {
    let catalog = fixture_catalog();
    let build = empty_build(&catalog, "sparrow");
    let build = apply(build, outfit(&catalog, "outfit-expansion"), 1);
    let build = apply(build, outfit(&catalog, "armor-plate"), 3);
    let build = apply(build, outfit(&catalog, "energy-blaster"), 1);

    assert_eq!(
        max_units_to_remove(&build, outfit(&catalog, "outfit-expansion"), units(1)),
        Err(LimitingFactor {
            constraint: Constraint::Attribute {
                attribute: Attribute::OutfitSpace
            },
            remaining: 9.0,
            required: 10.0,
        })
    );
}

#[test]
fn removing_sole_launcher_cascades_all_missiles() {
    let catalog = fixture_catalog();
    let build = default_build(&catalog, "mule");
    let launcher = outfit(&catalog, "meteor-launcher");

    assert_eq!(
        max_units_to_remove(&build, launcher, units(1)),
        Ok(Removal::Cascade(AmmoCascade {
            ammo: OutfitId::new("meteor-missile"),
            capacity_before: 20,
            capacity_after: 0,
            stock: 20,
            max_outfits_removable: 1,
            removable_without_cascade: 0,
        }))
    );
}

#[test]
fn spare_storage_is_removed_without_cascade() {
    let catalog = fixture_catalog();
    let rack = outfit(&catalog, "missile-rack");
    let build = apply(default_build(&catalog, "mule"), rack, 1);

    assert_eq!(
        max_units_to_remove(&build, rack, units(1)),
        Ok(Removal::Units { amount: 1 })
    );
}

#[test]
fn fixture_default_builds_are_valid() {
    let catalog = fixture_catalog();
    for hull in ["sparrow", "mule"] {
        let build = default_build(&catalog, hull);
        assert!(violations(&build).is_empty(), "{hull} default should be valid");
        assert!(is_valid(&build));
    }
}

#[test]
fn overdrawn_resources_are_reported() {
    let catalog = fixture_catalog();
    let armor = outfit(&catalog, "armor-plate").clone();
    let missile = outfit(&catalog, "meteor-missile").clone();
    let build = empty_build(&catalog, "sparrow")
        .with_outfits(vec![OutfitSet::new(armor, 4), OutfitSet::new(missile, 5)]);

    let found = violations(&build);
    assert_eq!(found.len(), 2);
    assert_eq!(
        found[0].constraint,
        Constraint::Attribute {
            attribute: Attribute::OutfitSpace
        }
    );
    assert_eq!(found[0].shortfall, 25.0);
    assert_eq!(
        found[1].constraint,
        Constraint::AmmoCapacity {
            ammo: OutfitId::new("meteor-missile")
        }
    );
    assert_eq!(found[1].shortfall, 5.0);
}
