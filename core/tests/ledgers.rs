//! Ledger tests: resources, economy, morale, customization, routes.

use citysim_core::{
    config::CityConfig,
    customization_ledger::CustomizationLedger,
    economy_ledger::EconomyLedger,
    game_state::GameState,
    morale_tracker::MoraleTracker,
    resource_ledger::ResourceLedger,
    rng::{LedgerSlot, RngBank},
    route_registry::RouteRegistry,
    types::Resource,
};

fn fresh_resources() -> ResourceLedger {
    ResourceLedger::new(&CityConfig::default().resources)
}

/// Starting amounts and capacities match the defaults.
#[test]
fn resources_start_at_configured_values() {
    let ledger = fresh_resources();
    let expected = [
        (Resource::Money, 1000, 5000),
        (Resource::Power, 100, 500),
        (Resource::Water, 100, 500),
        (Resource::Food, 100, 500),
    ];
    for (resource, amount, capacity) in expected {
        assert_eq!(ledger.amount(resource), amount, "{resource} starting amount");
        assert_eq!(ledger.capacity(resource), capacity, "{resource} capacity");
    }
}

/// One collection from money=1000 lands in [1050, 1150]; every resource
/// gains within its own inclusive range.
#[test]
fn collect_once_stays_in_range() {
    for seed in 0..200u64 {
        let mut ledger = fresh_resources();
        let mut rng = RngBank::new(seed).for_ledger_at_draw(LedgerSlot::Resources, 0);

        let gains = ledger.collect(&mut rng);

        let money = ledger.amount(Resource::Money);
        assert!((1050..=1150).contains(&money), "seed {seed}: money {money} outside [1050, 1150]");
        assert!((5..=15).contains(&gains[&Resource::Power]), "seed {seed}: power gain {}", gains[&Resource::Power]);
        assert!((10..=30).contains(&gains[&Resource::Water]), "seed {seed}: water gain {}", gains[&Resource::Water]);
        assert!((15..=25).contains(&gains[&Resource::Food]), "seed {seed}: food gain {}", gains[&Resource::Food]);
    }
}

/// Two collections compose: the final amount is the start plus both gains.
#[test]
fn collect_twice_is_sum_of_two_draws() {
    let mut ledger = fresh_resources();
    let bank = RngBank::new(4242);

    let first = ledger.collect(&mut bank.for_ledger_at_draw(LedgerSlot::Resources, 0));
    let second = ledger.collect(&mut bank.for_ledger_at_draw(LedgerSlot::Resources, 1));

    for resource in Resource::ALL {
        let start = fresh_resources().amount(resource);
        assert_eq!(
            ledger.amount(resource),
            start + first[&resource] + second[&resource],
            "{resource} did not compose"
        );
    }
    let money = ledger.amount(Resource::Money);
    assert!((1100..=1300).contains(&money), "money {money} outside [1100, 1300]");
}

/// Capacities are reported but never clamp.
#[test]
fn capacity_is_not_enforced() {
    let mut config = CityConfig::default();
    config.resources.initial.insert(Resource::Power, 495);
    let mut state = GameState::new(&config);
    state.start_new_game(&config, 1);

    for _ in 0..5 {
        state.collect_resources();
    }

    assert!(
        state.resources.amount(Resource::Power) > state.resources.capacity(Resource::Power),
        "Power should exceed its unenforced ceiling"
    );
}

/// Low resources means strictly negative, so collection never triggers it.
#[test]
fn check_low_only_reports_negative_amounts() {
    let mut ledger = fresh_resources();
    assert!(ledger.check_low().is_empty());

    let mut config = CityConfig::default();
    config.resources.initial.insert(Resource::Water, -5);
    config.resources.initial.insert(Resource::Food, 0);
    let negative = ResourceLedger::new(&config.resources);
    assert_eq!(negative.check_low(), vec![Resource::Water]);

    let mut rng = RngBank::new(3).for_ledger_at_draw(LedgerSlot::Resources, 0);
    ledger.collect(&mut rng);
    assert!(ledger.check_low().is_empty());
}

/// Balance after N incomes and M expenses is N×100 − M×50.
#[test]
fn balance_matches_accrual_counts() {
    for (n, m) in [(0, 0), (1, 0), (0, 1), (3, 7), (10, 4), (25, 50)] {
        let mut economy = EconomyLedger::new(&CityConfig::default().economy);
        for _ in 0..n {
            economy.accrue_income();
        }
        for _ in 0..m {
            economy.accrue_expense();
        }
        assert_eq!(economy.balance(), n * 100 - m * 50, "N={n} M={m}");
        assert_eq!(economy.total_income, n * 100);
        assert_eq!(economy.total_expenses, m * 50);
    }
}

/// Reading the balance does not change it.
#[test]
fn balance_is_a_pure_read() {
    let mut economy = EconomyLedger::new(&CityConfig::default().economy);
    economy.accrue_income();
    let before = economy.clone();
    assert_eq!(economy.balance(), economy.balance());
    assert_eq!(economy, before);
}

/// Happiness is unbounded both ways and every change is logged.
#[test]
fn morale_adjusts_without_bounds_and_logs() {
    let mut morale = MoraleTracker::new(&CityConfig::default().morale);
    assert_eq!(morale.happiness, 100);
    assert!(!morale.is_low());

    assert_eq!(morale.adjust(400, "festival"), 500);
    assert_eq!(morale.adjust(-451, "riot"), 49);
    assert!(morale.is_low(), "49 is below the threshold of 50");
    assert_eq!(morale.adjust(1, "recovery"), 50);
    assert!(!morale.is_low(), "50 is not below the threshold");
    assert_eq!(morale.adjust(-300, "collapse"), -250);

    let history = morale.history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[1].delta, -451);
    assert_eq!(history[1].happiness_after, 49);
    assert_eq!(history[1].reason, "riot");
}

#[test]
fn morale_display_warns_when_low() {
    let mut morale = MoraleTracker::new(&CityConfig::default().morale);
    assert_eq!(morale.to_string(), "Current Happiness Level: 100");
    morale.adjust(-60, "test");
    assert_eq!(morale.to_string(), "Current Happiness Level: 40\nWarning: Happiness is low!");
}

/// Customization counters only go up and report their new totals.
#[test]
fn customization_counters_increment() {
    let mut custom = CustomizationLedger::default();
    assert_eq!(custom.add_park(), 1);
    assert_eq!(custom.add_park(), 2);
    assert_eq!(custom.improve_transport(), 1);
    assert_eq!(custom.enhance_education(), 1);
    assert_eq!(custom.enhance_education(), 2);
    assert_eq!(custom.enhance_education(), 3);
    assert_eq!((custom.parks, custom.public_transport, custom.education), (2, 1, 3));
}

/// Routes keep insertion order, reject duplicates, and removal of an
/// absent name is a no-op.
#[test]
fn route_registry_append_and_remove() {
    let mut routes = RouteRegistry::default();
    assert!(routes.add_route("Line 1"));
    assert!(routes.add_route("Harbor Express"));
    assert!(routes.add_route("Line 2"));
    assert!(!routes.add_route("Line 1"), "Duplicate route must be refused");
    assert!(!routes.add_route("   "), "Blank route must be refused");
    assert_eq!(routes.routes(), ["Line 1", "Harbor Express", "Line 2"]);

    assert!(routes.remove_route("Harbor Express"));
    assert_eq!(routes.routes(), ["Line 1", "Line 2"]);

    let before = routes.clone();
    assert!(!routes.remove_route("Nowhere"));
    assert_eq!(routes, before);

    assert_eq!(routes.to_string(), "Current Routes:\n- Line 1\n- Line 2\n");
}

#[test]
fn resources_display_in_fixed_order() {
    let ledger = fresh_resources();
    assert_eq!(
        ledger.to_string(),
        "Current Resources:\nMoney: 1000\nPower: 100\nWater: 100\nFood: 100\n"
    );
}

/// Extreme adjustments pin happiness at the i64 range instead of overflowing.
#[test]
fn morale_saturates_at_integer_limits() {
    let mut morale = MoraleTracker::new(&CityConfig::default().morale);

    assert_eq!(morale.adjust(i64::MAX, "jubilee"), i64::MAX);
    assert_eq!(morale.adjust(1, "more"), i64::MAX, "Happiness must stay pinned at the maximum");
    assert_eq!(morale.adjust(i64::MIN, "collapse"), -1);
    assert_eq!(morale.adjust(i64::MIN, "collapse"), i64::MIN);
    assert!(morale.is_low());
    assert_eq!(morale.history().len(), 4);
    assert_eq!(morale.history()[1].happiness_after, i64::MAX);
}

/// Totals near the limit saturate, and the balance never overflows.
#[test]
fn economy_saturates_near_integer_limits() {
    let mut economy = EconomyLedger::new(&CityConfig::default().economy);
    economy.total_income = i64::MAX - 10;
    economy.total_expenses = i64::MIN + 10;

    assert_eq!(economy.accrue_income(), i64::MAX);
    assert_eq!(economy.balance(), i64::MAX, "Balance must saturate, not wrap");

    economy.total_income = i64::MIN;
    economy.total_expenses = i64::MAX - 20;
    assert_eq!(economy.accrue_expense(), i64::MAX);
    assert_eq!(economy.balance(), i64::MIN);
}

/// Collecting onto an amount at the limit keeps it at the limit.
#[test]
fn collect_saturates_at_integer_limit() {
    let mut config = CityConfig::default().resources;
    config.initial.insert(Resource::Food, i64::MAX - 1);
    let mut ledger = ResourceLedger::new(&config);

    let gains = ledger.collect(&mut RngBank::new(3).for_ledger_at_draw(LedgerSlot::Resources, 0));

    assert!(gains[&Resource::Food] >= 15);
    assert_eq!(ledger.amount(Resource::Food), i64::MAX);
}
