#[cfg(test)]
mod tests {
    use crate::assets::Asset;
    use crate::goals::InvestmentGoal;
    use crate::portfolio::rebalancing::{plan_contribution, ContributionSuggestion};

    const EPS: f64 = 1e-6;

    fn asset(id: &str, class: &str, quantity: f64, price: f64, score: f64) -> Asset {
        Asset {
            id: id.to_string(),
            class: class.to_string(),
            ticker: id.to_uppercase(),
            score,
            quantity,
            current_price: price,
            average_price: price,
            ..Default::default()
        }
    }

    fn class_total(suggestions: &[ContributionSuggestion], class: &str) -> f64 {
        suggestions
            .iter()
            .filter(|s| s.class == class)
            .map(|s| s.suggested_value)
            .sum()
    }

    fn find<'a>(suggestions: &'a [ContributionSuggestion], id: &str) -> &'a ContributionSuggestion {
        suggestions
            .iter()
            .find(|s| s.id == id)
            .unwrap_or_else(|| panic!("no suggestion for {}", id))
    }

    fn dilution_goals() -> Vec<InvestmentGoal> {
        vec![
            InvestmentGoal::new("Acoes", 40.0),
            InvestmentGoal::new("FIIs", 40.0),
            InvestmentGoal::new("Renda Fixa", 20.0),
        ]
    }

    fn dilution_assets() -> Vec<Asset> {
        vec![
            asset("petr4", "Acoes", 1.0, 100.0, 10.0),
            asset("vale3", "Acoes", 0.0, 100.0, 10.0),
            asset("hglg11", "FIIs", 1.0, 100.0, 10.0),
            asset("knip11", "FIIs", 0.0, 100.0, 10.0),
            asset("tesouro", "Renda Fixa", 8.0, 100.0, 10.0),
        ]
    }

    #[test]
    fn test_non_positive_amount_returns_nothing() {
        let assets = dilution_assets();
        let goals = dilution_goals();
        assert!(plan_contribution(&assets, &goals, 0.0).is_empty());
        assert!(plan_contribution(&assets, &goals, -500.0).is_empty());
        assert!(plan_contribution(&assets, &goals, f64::NAN).is_empty());
    }

    #[test]
    fn test_full_dilution_amount_fills_underweight_classes() {
        let suggestions = plan_contribution(&dilution_assets(), &dilution_goals(), 3000.0);

        assert!((class_total(&suggestions, "Acoes") - 1500.0).abs() < EPS);
        assert!((class_total(&suggestions, "FIIs") - 1500.0).abs() < EPS);
        assert_eq!(class_total(&suggestions, "Renda Fixa"), 0.0);

        // Equal scores: each asset targets 800. The held one already has 100.
        assert!((find(&suggestions, "petr4").suggested_value - 700.0).abs() < EPS);
        assert!((find(&suggestions, "vale3").suggested_value - 800.0).abs() < EPS);
        assert!(find(&suggestions, "vale3").is_new_class);
        assert!(!find(&suggestions, "petr4").is_new_class);
    }

    #[test]
    fn test_partial_amount_is_scaled_across_classes() {
        let suggestions = plan_contribution(&dilution_assets(), &dilution_goals(), 1000.0);

        let total: f64 = suggestions.iter().map(|s| s.suggested_value).sum();
        assert!((total - 1000.0).abs() < EPS);
        assert!((class_total(&suggestions, "Acoes") - 500.0).abs() < EPS);
        assert!((class_total(&suggestions, "FIIs") - 500.0).abs() < EPS);
    }

    #[test]
    fn test_excess_cash_is_not_suggested() {
        let assets = vec![
            asset("a", "A", 1.0, 100.0, 5.0),
            asset("b", "B", 1.0, 100.0, 5.0),
        ];
        let goals = vec![InvestmentGoal::new("A", 50.0), InvestmentGoal::new("B", 50.0)];
        let suggestions = plan_contribution(&assets, &goals, 1000.0);

        // Post total 1200: each class targets 600 and needs 500.
        let total: f64 = suggestions.iter().map(|s| s.suggested_value).sum();
        assert!((total - 1000.0).abs() < EPS);

        let goals = vec![InvestmentGoal::new("A", 50.0), InvestmentGoal::new("B", 30.0)];
        let suggestions = plan_contribution(&assets, &goals, 1000.0);
        let total: f64 = suggestions.iter().map(|s| s.suggested_value).sum();
        // Targets sum to 80%: only 960 - 200 = 760 is needed.
        assert!((total - 760.0).abs() < EPS);
        assert!(total < 1000.0);
    }

    #[test]
    fn test_zero_target_class_never_receives_funds() {
        let assets = vec![
            asset("a", "A", 0.0, 10.0, 10.0),
            asset("b", "B", 1.0, 10.0, 10.0),
        ];
        let goals = vec![InvestmentGoal::new("A", 0.0), InvestmentGoal::new("B", 100.0)];
        let suggestions = plan_contribution(&assets, &goals, 500.0);

        assert_eq!(class_total(&suggestions, "A"), 0.0);
        assert!((class_total(&suggestions, "B") - 500.0).abs() < EPS);
    }

    #[test]
    fn test_empty_goal_class_is_funded_through_watchlist_candidate() {
        let assets = vec![
            asset("ivvb11", "Stocks", 0.0, 300.0, 7.0),
            asset("petr4", "Ações (BR)", 10.0, 75.0, 10.0),
        ];
        let goals = vec![
            InvestmentGoal::new("Stocks", 25.0),
            InvestmentGoal::new("Ações (BR)", 75.0),
        ];
        let suggestions = plan_contribution(&assets, &goals, 250.0);

        let stocks = find(&suggestions, "ivvb11");
        assert!(stocks.suggested_value > 0.0);
        assert!(stocks.is_new_class);
        assert_eq!(stocks.current_percentage, 0.0);
        assert!((stocks.suggested_qty - stocks.suggested_value / 300.0).abs() < EPS);
    }

    #[test]
    fn test_zero_score_unheld_asset_is_not_a_candidate() {
        let assets = vec![
            asset("held", "A", 1.0, 100.0, 5.0),
            asset("ignored", "A", 0.0, 100.0, 0.0),
        ];
        let goals = vec![InvestmentGoal::new("A", 100.0)];
        let suggestions = plan_contribution(&assets, &goals, 100.0);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, "held");
    }

    #[test]
    fn test_class_without_candidates_yields_no_suggestion() {
        let assets = vec![asset("a", "A", 1.0, 100.0, 5.0)];
        let goals = vec![InvestmentGoal::new("A", 50.0), InvestmentGoal::new("B", 50.0)];
        let suggestions = plan_contribution(&assets, &goals, 100.0);

        // Only "B" is short of target, and it has nothing to buy.
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_overweight_asset_in_funded_class_gets_nothing() {
        let assets = vec![
            asset("big", "A", 10.0, 100.0, 1.0),
            asset("small", "A", 1.0, 100.0, 9.0),
            asset("other", "B", 20.0, 100.0, 5.0),
        ];
        let goals = vec![InvestmentGoal::new("A", 60.0), InvestmentGoal::new("B", 40.0)];
        let suggestions = plan_contribution(&assets, &goals, 1000.0);

        assert!(suggestions.iter().all(|s| s.id != "big"));
        assert!(find(&suggestions, "small").suggested_value > 0.0);
    }

    #[test]
    fn test_zero_price_candidate_uses_unit_price() {
        let assets = vec![
            asset("held", "A", 1.0, 100.0, 5.0),
            asset("unpriced", "B", 0.0, 0.0, 5.0),
        ];
        let goals = vec![InvestmentGoal::new("A", 50.0), InvestmentGoal::new("B", 50.0)];
        let suggestions = plan_contribution(&assets, &goals, 100.0);

        let unpriced = find(&suggestions, "unpriced");
        assert!(unpriced.suggested_qty.is_finite());
        assert!((unpriced.suggested_qty - unpriced.suggested_value).abs() < EPS);
    }

    #[test]
    fn test_sorted_by_suggested_value_descending() {
        let assets = vec![
            asset("a1", "A", 0.0, 10.0, 1.0),
            asset("a2", "A", 0.0, 10.0, 5.0),
            asset("b1", "B", 0.0, 10.0, 3.0),
            asset("c1", "C", 1.0, 10.0, 3.0),
        ];
        let goals = vec![
            InvestmentGoal::new("A", 40.0),
            InvestmentGoal::new("B", 35.0),
            InvestmentGoal::new("C", 25.0),
        ];
        let suggestions = plan_contribution(&assets, &goals, 5000.0);

        assert!(suggestions.len() >= 3);
        for pair in suggestions.windows(2) {
            assert!(pair[0].suggested_value >= pair[1].suggested_value);
        }
    }

    #[test]
    fn test_tiny_allocations_are_dropped() {
        let assets = vec![
            asset("a", "A", 1.0, 100.0, 5.0),
            asset("b", "B", 1.0, 100.0, 5.0),
        ];
        let goals = vec![InvestmentGoal::new("A", 50.0), InvestmentGoal::new("B", 50.0)];

        // Each class budget would be 0.5.
        assert!(plan_contribution(&assets, &goals, 1.0).is_empty());
    }

    #[test]
    fn test_sole_recipient_moves_toward_but_not_past_ideal() {
        let assets = vec![
            asset("a", "A", 1.0, 100.0, 5.0),
            asset("b", "B", 3.0, 100.0, 5.0),
        ];
        let goals = vec![InvestmentGoal::new("A", 50.0), InvestmentGoal::new("B", 50.0)];

        for amount in [10.0, 150.0, 200.0, 1000.0] {
            let suggestions = plan_contribution(&assets, &goals, amount);
            let a = find(&suggestions, "a");
            assert!(a.after_percentage <= a.ideal_percentage + EPS);
            let diluted = 100.0 / (400.0 + amount) * 100.0;
            assert!(a.after_percentage > diluted);
        }
    }

    #[test]
    fn test_after_percentage_uses_post_contribution_total() {
        let assets = vec![
            asset("a", "A", 1.0, 100.0, 5.0),
            asset("b", "B", 1.0, 100.0, 5.0),
        ];
        let goals = vec![InvestmentGoal::new("A", 100.0)];
        let suggestions = plan_contribution(&assets, &goals, 200.0);

        let a = find(&suggestions, "a");
        assert!((a.suggested_value - 200.0).abs() < EPS);
        assert!((a.current_percentage - 50.0).abs() < EPS);
        assert!((a.after_percentage - 75.0).abs() < EPS);
    }

    #[test]
    fn test_no_assets_or_goals_is_empty() {
        assert!(plan_contribution(&[], &[], 1000.0).is_empty());
        assert!(plan_contribution(&dilution_assets(), &[], 1000.0).is_empty());
    }

    #[test]
    fn test_non_finite_amount_is_empty() {
        let assets = vec![asset("a", "A", 1.0, 100.0, 5.0)];
        let goals = vec![InvestmentGoal::new("A", 100.0)];
        assert!(plan_contribution(&assets, &goals, f64::INFINITY).is_empty());
        assert!(plan_contribution(&assets, &goals, f64::NEG_INFINITY).is_empty());
        assert!(plan_contribution(&assets, &goals, f64::NAN).is_empty());
    }
}
