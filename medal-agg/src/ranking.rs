//! Country ranking over the totals table.

use medal_data::CountryTotal;

/// Sort countries by total descending. The sort is stable, so ties keep
/// their original row order.
pub fn rank_by_total(totals: &[CountryTotal]) -> Vec<CountryTotal> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked
}

/// Country keys of the top `k` entries of the ranked list.
pub fn top_keys(totals: &[CountryTotal], k: usize) -> Vec<String> {
    rank_by_total(totals)
        .into_iter()
        .take(k)
        .map(|t| t.country)
        .collect()
}
