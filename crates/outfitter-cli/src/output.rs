//! Output formatting for catalog listings, aggregates and edit results.
//!
//! Text renderings go to stdout as aligned tables; JSON renderings serialize
//! the library's own types so scripted consumers see the same field names.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use outfitter_lib::aggregates::Capacity;
use outfitter_lib::{
    AggregateBundle, Build, Hull, LimitingFactor, Outfit, OutfitChange, Violation,
};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Serialize any value as pretty JSON to stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Hull table as printed by `hulls`.
pub fn hull_table(hulls: &[&Hull]) -> String {
    if hulls.is_empty() {
        return "No hulls available in catalog.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Available hulls ({}):", hulls.len());
    let _ = writeln!(
        out,
        "{:<16} {:<20} {:<12} {:>8} {:>8} {:>8}",
        "Id", "Name", "Release", "Outfits", "Engines", "Weapons"
    );
    for hull in hulls {
        let _ = writeln!(
            out,
            "{:<16} {:<20} {:<12} {:>8.0} {:>8.0} {:>8.0}",
            hull.id,
            hull.name,
            hull.release,
            hull.attributes.outfit_space,
            hull.attributes.engine_capacity,
            hull.attributes.weapon_capacity
        );
    }
    out
}

/// Outfit table as printed by `outfits`.
pub fn outfit_table(outfits: &[&Outfit]) -> String {
    if outfits.is_empty() {
        return "No outfits available in catalog.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Available outfits ({}):", outfits.len());
    let _ = writeln!(
        out,
        "{:<22} {:<26} {:<18} {:>8}",
        "Id", "Name", "Category", "Space"
    );
    for outfit in outfits {
        let _ = writeln!(
            out,
            "{:<22} {:<26} {:<18} {:>8.0}",
            outfit.id,
            outfit.name,
            outfit.category.label(),
            outfit.attributes.outfit_space
        );
    }
    out
}

/// Build contents followed by every aggregate group.
pub fn aggregate_report(build: &Build, bundle: &AggregateBundle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}, hull {})", build.name, build.id, build.hull.name);
    if build.outfits.is_empty() {
        let _ = writeln!(out, "  (no outfits)");
    }
    for set in &build.outfits {
        let _ = writeln!(
            out,
            "  {:>4} x {:<26} [{}]",
            set.amount,
            set.outfit.name,
            set.outfit.category.label()
        );
    }

    let d = &bundle.defense;
    section(
        &mut out,
        "Defense",
        &[
            ("Hull", d.hull),
            ("Shields", d.shields),
            ("Total HP", d.total_hp),
            ("Hull regen", d.hull_regen),
            ("Shield regen", d.shield_regen),
            ("Anti-missile DPS", d.anti_missile_dps),
        ],
    );

    let m = &bundle.mobility;
    section(
        &mut out,
        "Mobility",
        &[
            ("Thrust", m.thrust),
            ("Drag", m.drag),
            ("Max speed", m.max_speed),
            ("Acceleration", m.acceleration_no_cargo),
            ("Acceleration (cargo)", m.acceleration_with_cargo),
            ("Turn", m.turn),
            ("Turn rate", m.turn_no_cargo),
            ("Turn rate (cargo)", m.turn_with_cargo),
            ("Mass", m.mass_no_cargo),
            ("Mass (cargo)", m.mass_with_cargo),
            ("Fuel capacity", m.fuel_capacity),
            ("Jump fuel", m.jump_fuel),
            ("Ramscoop", m.ramscoop),
            ("Firing fuel", m.firing_fuel),
        ],
    );

    let missions = &bundle.missions;
    section(
        &mut out,
        "Missions",
        &[
            ("Cargo space", missions.cargo_space),
            ("Required crew", missions.required_crew),
            ("Bunks", missions.bunks),
        ],
    );

    let s = &bundle.space;
    let _ = writeln!(out, "\nSpace (free / total):");
    for (label, capacity) in [
        ("Outfit space", s.outfit_space),
        ("Engine capacity", s.engine_capacity),
        ("Weapon capacity", s.weapon_capacity),
        ("Gun ports", s.gun_ports),
        ("Turret mounts", s.turret_mounts),
        ("Fighter bays", s.fighter_bays),
        ("Drone bays", s.drone_bays),
    ] {
        let _ = writeln!(out, "  {:<22} {}", label, capacity_cell(capacity));
    }

    let h = &bundle.heat;
    section(
        &mut out,
        "Heat",
        &[
            ("Cooling efficiency", h.cooling_efficiency),
            ("Cooling", h.cooling),
            ("Active cooling", h.active_cooling),
            ("Heat generation", h.heat_generation),
            ("Idle heat", h.idle_heat),
            ("Idle heat level", h.idle_heat_level),
            ("Moving heat", h.moving_heat),
            ("Firing heat", h.firing_heat),
            ("Action heat", h.action_heat),
            ("Action heat level", h.action_heat_level),
            ("Heat dissipation", h.heat_dissipation),
            ("Max heat", h.max_heat),
        ],
    );

    let e = &bundle.energy;
    section(
        &mut out,
        "Energy",
        &[
            ("Generation", e.energy_generation),
            ("Solar collection", e.solar_collection),
            ("Consumption", e.energy_consumption),
            ("Cooling energy", e.cooling_energy),
            ("Idle energy", e.idle_energy),
            ("Moving energy", e.moving_energy),
            ("Firing energy", e.firing_energy),
            ("Action energy", e.action_energy),
            ("Energy capacity", e.energy_capacity),
        ],
    );

    let o = &bundle.offense;
    section(
        &mut out,
        "Offense",
        &[
            ("Shield DPS", o.shield_dps),
            ("Hull DPS", o.hull_dps),
            ("Average DPS", o.average_dps),
            ("Heat DPS", o.heat_dps),
            ("Ion DPS", o.ion_dps),
            ("Slowing DPS", o.slowing_dps),
            ("Disruption DPS", o.disruption_dps),
        ],
    );
    for ammo in &o.ammo {
        let _ = writeln!(
            out,
            "  {:<22} {} / {}",
            format!("{} ammo", ammo.name),
            ammo.stock,
            ammo.capacity
        );
    }

    out
}

/// One-line summary of an applied add or remove.
pub fn change_summary(verb: &str, outfit: &Outfit, requested: u32, change: &OutfitChange) -> String {
    let mut out = format!("{verb} {} x {}", change.amount, outfit.name);
    if change.amount < requested {
        let _ = write!(out, " (requested {requested})");
    }
    if let Some(removed) = &change.ammo_removed {
        let _ = write!(out, "; also removed {} x {}", removed.amount, removed.ammo);
    }
    out.push('\n');
    out
}

/// Diagnostic shown when a change cannot move a single unit.
pub fn blocked_message(outfit: &Outfit, factor: &LimitingFactor) -> String {
    format!("cannot change {}: {factor}", outfit.name)
}

pub fn violation_report(violations: &[Violation]) -> String {
    if violations.is_empty() {
        return "Build is valid.\n".to_string();
    }
    let mut out = format!("Build is invalid ({} violations):\n", violations.len());
    for violation in violations {
        let _ = writeln!(out, "  - {violation}");
    }
    out
}

fn section(out: &mut String, title: &str, rows: &[(&str, f64)]) {
    let _ = writeln!(out, "\n{title}:");
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<22} {}", label, number(*value));
    }
}

fn capacity_cell(capacity: Capacity) -> String {
    format!("{} / {}", number(capacity.free), number(capacity.total))
}

/// Integers print bare; fractions keep two decimals.
fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
