//! End-to-end tracker scenarios over the in-memory store.

use macrolog_core::storage::keys;
use macrolog_core::{
    Band, DayKey, EnergyUnit, EntryInput, Goals, MemoryStore, Tracker, WEEK_DAYS,
};

fn input(name: &str, energy: &str, unit: EnergyUnit, protein: &str) -> EntryInput {
    EntryInput {
        name: name.to_string(),
        energy: energy.to_string(),
        unit,
        protein: protein.to_string(),
    }
}

fn day(s: &str) -> DayKey {
    DayKey::parse(s).unwrap()
}

#[test]
fn two_entries_same_name_are_distinct_and_sum() {
    let mut tracker = Tracker::load(MemoryStore::new()).unwrap();
    let d = day("2024-01-01");

    let first = tracker
        .add_entry(&d, &input("Eggs", "140", EnergyUnit::Kcal, "12"))
        .unwrap();
    let second = tracker
        .add_entry(&d, &input("Eggs", "160", EnergyUnit::Kcal, "14"))
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(tracker.entries_for(&d).len(), 2);

    let totals = tracker.totals_for(&d);
    assert_eq!(totals.energy, 300);
    assert_eq!(totals.protein, 26.0);

    // same name, so the history holds one template with the latest macros
    assert_eq!(tracker.history().len(), 1);
    assert_eq!(tracker.history().templates()[0].energy, 160);
}

#[test]
fn kilojoule_entry_is_stored_as_rounded_kcal() {
    let mut tracker = Tracker::load(MemoryStore::new()).unwrap();
    let d = day("2024-01-01");
    let stored = tracker
        .add_entry(&d, &input("Shake", "1000", EnergyUnit::Kj, "30"))
        .unwrap();
    assert_eq!(stored.energy, 239); // round(1000 / 4.184)
}

#[test]
fn removing_a_nonexistent_id_leaves_the_day_unchanged() {
    let mut tracker = Tracker::load(MemoryStore::new()).unwrap();
    let d = day("2024-01-01");
    tracker
        .add_entry(&d, &input("Eggs", "140", EnergyUnit::Kcal, "12"))
        .unwrap();

    let before: Vec<_> = tracker.entries_for(&d).to_vec();
    assert!(tracker.remove_entry(&d, "no-such-id").is_err());
    assert_eq!(tracker.entries_for(&d), before.as_slice());
}

#[test]
fn update_replaces_fields_and_feeds_history() {
    let mut tracker = Tracker::load(MemoryStore::new()).unwrap();
    let d = day("2024-01-01");
    let stored = tracker
        .add_entry(&d, &input("Oats", "300", EnergyUnit::Kcal, "10"))
        .unwrap();

    tracker
        .update_entry(&d, &stored.id, &input("oats", "350", EnergyUnit::Kcal, "12"))
        .unwrap();

    let entries = tracker.entries_for(&d);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, stored.id);
    assert_eq!(entries[0].name, "oats");
    assert_eq!(entries[0].energy, 350);

    // case-insensitive collision: last write wins, casing included
    let templates = tracker.history().templates();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].name, "oats");
    assert_eq!(templates[0].energy, 350);
    assert_eq!(templates[0].protein, 12.0);
}

#[test]
fn state_survives_a_reload_through_the_store() {
    let store = MemoryStore::new();
    let (ledger_json, history_json, goals_json) = {
        let mut tracker = Tracker::load(store).unwrap();
        let d = day("2024-01-01");
        tracker
            .add_entry(&d, &input("Eggs", "140", EnergyUnit::Kcal, "12"))
            .unwrap();
        tracker.set_goals(1800, 120).unwrap();
        let store = tracker.into_store();
        (
            store.get(keys::LEDGER).unwrap(),
            store.get(keys::MEAL_HISTORY).unwrap(),
            store.get(keys::GOALS).unwrap(),
        )
    };

    let fresh = MemoryStore::new();
    fresh.seed(keys::LEDGER, &ledger_json);
    fresh.seed(keys::MEAL_HISTORY, &history_json);
    fresh.seed(keys::GOALS, &goals_json);

    let tracker = Tracker::load(fresh).unwrap();
    let d = day("2024-01-01");
    assert_eq!(tracker.entries_for(&d).len(), 1);
    assert_eq!(tracker.entries_for(&d)[0].name, "Eggs");
    assert_eq!(tracker.history().len(), 1);
    assert_eq!(tracker.goals(), Goals::new(1800, 120).unwrap());
}

#[test]
fn malformed_persisted_records_default_instead_of_failing() {
    let store = MemoryStore::new();
    store.seed(keys::LEDGER, "not json at all");
    store.seed(keys::MEAL_HISTORY, r#"{"wrong":"shape"}"#);
    store.seed(keys::GOALS, r#"[1,2,3]"#);
    store.seed(keys::DISPLAY_UNIT, "\"furlongs\"");
    store.seed(keys::THEME, "42");

    let tracker = Tracker::load(store).unwrap();
    assert!(tracker.entries_for(&day("2024-01-01")).is_empty());
    assert!(tracker.history().is_empty());
    assert_eq!(tracker.goals(), Goals::default());
    assert_eq!(tracker.display_unit(), EnergyUnit::Kcal);
    assert!(tracker.dark_mode());
}

#[test]
fn ledger_with_malformed_day_key_defaults_to_empty() {
    let store = MemoryStore::new();
    store.seed(
        keys::LEDGER,
        r#"{"2024-1-5":[{"id":"x","name":"Eggs","energy":140,"protein":12.0,"created_at":"2024-01-05T08:00:00Z"}]}"#,
    );
    let tracker = Tracker::load(store).unwrap();
    assert_eq!(tracker.ledger().logged_days(), 0);
}

#[test]
fn weekly_rollup_counts_unlogged_days_as_zero() {
    let mut tracker = Tracker::load(MemoryStore::new()).unwrap();
    let today = DayKey::today();
    tracker
        .add_entry(&today, &input("Dinner", "700", EnergyUnit::Kcal, "35"))
        .unwrap();

    let window = tracker.rollup(WEEK_DAYS, None);
    assert_eq!(window.len(), 7);
    assert_eq!(window[6].day, today);
    assert_eq!(window[6].energy, 700);
    assert!(window[..6].iter().all(|a| a.energy == 0));

    let summary = tracker.summary(WEEK_DAYS, None);
    assert_eq!(summary.total_energy, 700);
    assert_eq!(summary.avg_energy, 100.0);
}

#[test]
fn day_report_flags_over_goal_energy() {
    let mut tracker = Tracker::load(MemoryStore::new()).unwrap();
    tracker.set_goals(2000, 150).unwrap();
    let d = day("2024-01-01");
    tracker
        .add_entry(&d, &input("Feast", "2100", EnergyUnit::Kcal, "160"))
        .unwrap();

    let report = tracker.day_report(&d).unwrap();
    assert_eq!(report.energy_band, Band::Over);
    assert!(report.energy_over);
    assert_eq!(report.energy_progress, 1.0); // capped
    assert_eq!(report.protein_band, Band::Good); // over protein goal is fine
    assert!(report.protein_over);
}
