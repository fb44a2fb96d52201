use crate::models::{StatCard, StatsRecord};
use crate::period::Granularity;

/// Builds the four headline cards shown above the charts.
pub fn build_cards(stats: &StatsRecord, granularity: Granularity) -> Vec<StatCard> {
    let this = format!("This {}", granularity.noun());
    vec![
        StatCard {
            title: "Total Revenue",
            amount: stats.total_revenue,
            description: this.clone(),
            trend: stats.trends.revenue,
        },
        StatCard {
            title: "Total Expense",
            amount: stats.total_expense,
            description: this.clone(),
            trend: stats.trends.expense,
        },
        StatCard {
            title: "Net Profit",
            amount: stats.net_profit,
            description: this,
            trend: stats.trends.profit,
        },
        StatCard {
            title: "Net Cashflow",
            amount: stats.net_cashflow,
            description: format!("Net this {}", granularity.noun()),
            trend: stats.trends.cashflow,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Bucket;
    use crate::registry::Registry;

    #[test]
    fn cards_follow_stats_record() {
        let registry = Registry::demo().unwrap();
        let stats = registry.stats(Bucket::parse("Q2_2024").unwrap()).record;

        let cards = build_cards(stats, Granularity::Quarterly);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Total Revenue");
        assert_eq!(cards[0].amount, 286000);
        assert_eq!(cards[2].amount, 103000);
        assert_eq!(cards[0].description, "This quarter");
        assert_eq!(cards[3].description, "Net this quarter");
        assert!(!cards[1].trend.is_positive);
        assert_eq!(cards[3].trend.value, 13.5);
    }

    #[test]
    fn annual_cards_say_year() {
        let registry = Registry::demo().unwrap();
        let stats = registry.stats(Bucket::Year { year: 2025 }).record;
        let cards = build_cards(stats, Granularity::Annually);
        assert_eq!(cards[0].description, "This year");
        assert_eq!(cards[2].amount, 711000);
    }
}
