//! Property tests for the outcome models.
//!
//! For any ratings in [0, 1] every model must produce a valid
//! distribution, and sampling must map every variate to exactly one
//! outcome of that distribution.

use baseball_sim::core::{ClampBounds, RateBounds, RateCoefficients};
use baseball_sim::players::{BatterRatings, PitcherRatings};
use baseball_sim::sim::{
    BlendedModel, ClampedRatingModel, LeagueRateModel, LeagueRates, Matchup, Outcome,
    OutcomeModel, Platoon,
};
use proptest::prelude::*;

fn rating() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

prop_compose! {
    fn batter()(contact in rating(), power in rating(), eye in rating(),
                speed in rating(), gb in rating(), fb in rating()) -> BatterRatings {
        BatterRatings {
            contact,
            power,
            eye,
            speed,
            ground_ball_tendency: gb,
            fly_ball_tendency: fb,
        }
    }
}

prop_compose! {
    fn pitcher()(stuff in rating(), control in rating(), movement in rating(),
                 stamina in rating()) -> PitcherRatings {
        PitcherRatings { stuff, control, movement, stamina }
    }
}

fn platoon() -> impl Strategy<Value = Platoon> {
    prop_oneof![Just(Platoon::Same), Just(Platoon::Opposite)]
}

fn models() -> Vec<Box<dyn OutcomeModel>> {
    vec![
        Box::new(ClampedRatingModel::default()),
        Box::new(LeagueRateModel::default()),
        Box::new(BlendedModel::default()),
        Box::new(BlendedModel::new(
            LeagueRates::default(),
            ClampedRatingModel::default(),
            0.5,
        )),
    ]
}

proptest! {
    #[test]
    fn distribution_is_valid(bat in batter(), pit in pitcher(), side in platoon()) {
        let matchup = Matchup::new(&bat, &pit, side);
        for model in models() {
            let dist = model.distribution(&matchup);
            for (outcome, p) in dist.iter() {
                prop_assert!(p >= 0.0, "{} {outcome} = {p}", model.name());
            }
            prop_assert!(
                (dist.total() - 1.0).abs() < 1e-9,
                "{} total {}",
                model.name(),
                dist.total()
            );
        }
    }

    #[test]
    fn sampling_is_exhaustive(
        bat in batter(),
        pit in pitcher(),
        side in platoon(),
        u in 0.0f64..1.0,
    ) {
        let matchup = Matchup::new(&bat, &pit, side);
        for model in models() {
            let dist = model.distribution(&matchup);
            let outcome = dist.sample(u);
            prop_assert!(dist.outcomes().any(|o| o == outcome));
        }
    }

    #[test]
    fn clamped_rates_within_bounds(bat in batter(), pit in pitcher()) {
        let model = ClampedRatingModel::default();
        let bounds = ClampBounds::default();
        let rates = model.clamped_rates(&bat, &pit);

        let within = |r: f64, b: RateBounds| r >= b.min && r <= b.max;
        prop_assert!(within(rates.walk, bounds.walk));
        prop_assert!(within(rates.strikeout, bounds.strikeout));
        prop_assert!(within(rates.home_run, bounds.home_run));
        prop_assert!(within(rates.in_play, bounds.in_play));
        prop_assert!(rates.total() > 0.0);
    }

    #[test]
    fn home_run_rate_monotone_in_power(
        bat in batter(),
        pit in pitcher(),
        a in rating(),
        b in rating(),
    ) {
        let model = ClampedRatingModel::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let weak = BatterRatings { power: lo, ..bat };
        let strong = BatterRatings { power: hi, ..bat };

        let weak_hr = model.raw_rates(&weak, &pit).home_run;
        let strong_hr = model.raw_rates(&strong, &pit).home_run;
        prop_assert!(weak_hr >= 0.0);
        prop_assert!(strong_hr >= weak_hr);
    }

    #[test]
    fn walk_rate_monotone_in_control(
        bat in batter(),
        pit in pitcher(),
        a in rating(),
        b in rating(),
    ) {
        let model = ClampedRatingModel::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let wild = PitcherRatings { control: lo, ..pit };
        let precise = PitcherRatings { control: hi, ..pit };

        prop_assert!(model.raw_rates(&bat, &precise).walk <= model.raw_rates(&bat, &wild).walk);
    }
}

// =============================================================================
// Clamp Bounds
// =============================================================================

/// Patient power hitter with no contact against a wild strikeout pitcher.
fn extreme_matchup() -> (BatterRatings, PitcherRatings) {
    let bat = BatterRatings {
        contact: 0.0,
        power: 1.0,
        eye: 1.0,
        ..BatterRatings::default()
    };
    let pit = PitcherRatings {
        stuff: 1.0,
        control: 0.0,
        movement: 0.0,
        stamina: 0.5,
    };
    (bat, pit)
}

/// Each of the four reachable floors is hit by the matching extreme ratings.
#[test]
fn test_lower_clamps_reachable() {
    let model = ClampedRatingModel::default();
    let pit = PitcherRatings::uniform(0.5);

    let no_eye = BatterRatings {
        eye: 0.0,
        ..BatterRatings::default()
    };
    assert_eq!(model.clamped_rates(&no_eye, &pit).walk, 0.02);

    let no_power = BatterRatings {
        power: 0.0,
        ..BatterRatings::default()
    };
    assert_eq!(model.clamped_rates(&no_power, &pit).home_run, 0.005);

    let contact_hitter = BatterRatings {
        contact: 1.0,
        ..BatterRatings::default()
    };
    assert_eq!(model.clamped_rates(&contact_hitter, &pit).strikeout, 0.08);
}

/// With standard coefficients, ratings in [0, 1] never reach the ceilings.
#[test]
fn test_standard_ceilings_unreachable() {
    let model = ClampedRatingModel::default();
    let (bat, pit) = extreme_matchup();
    let raw = model.raw_rates(&bat, &pit);

    assert!((raw.walk - 0.12).abs() < 1e-12);
    assert!((raw.strikeout - 0.24).abs() < 1e-12);
    assert!((raw.home_run - 0.04).abs() < 1e-12);
}

/// Scaled-up coefficients drive each rate into its ceiling.
#[test]
fn test_upper_clamps_reachable_with_scaled_coefficients() {
    let coefficients = RateCoefficients {
        walk_scale: 0.25,
        strikeout_scale: 0.45,
        home_run_scale: 0.15,
        ..RateCoefficients::default()
    };
    let model = ClampedRatingModel::new(coefficients, ClampBounds::default());
    let (bat, pit) = extreme_matchup();
    let rates = model.clamped_rates(&bat, &pit);

    assert_eq!(rates.walk, 0.18);
    assert_eq!(rates.strikeout, 0.38);
    assert_eq!(rates.home_run, 0.10);
    assert_eq!(rates.in_play, 0.35);

    let dist = model.distribution(&Matchup::new(&bat, &pit, Platoon::Same));
    assert!((dist.total() - 1.0).abs() < 1e-12);
    assert!(dist.probability(Outcome::Walk) < 0.18);
}
