// crates/citydb-core/src/registry.rs

//! Ranking and neighbourhood queries over the population-sorted city list.

use crate::model::{City, CityDb};

impl CityDb {
    /// 1-based population rank of `city`.
    ///
    /// Cities handed out by this database resolve in O(1). A city from
    /// elsewhere is located by value; `None` if it is not part of the dataset.
    pub fn rank_of(&self, city: &City) -> Option<usize> {
        if let Some(own) = city.rank.checked_sub(1).and_then(|i| self.cities.get(i)) {
            if std::ptr::eq(own, city) || own == city {
                return Some(city.rank);
            }
        }
        self.cities
            .iter()
            .position(|c| same_place(c, city))
            .map(|i| i + 1)
    }

    /// City at a 1-based rank.
    pub fn city_at_rank(&self, rank: usize) -> Option<&City> {
        rank.checked_sub(1).and_then(|i| self.cities.get(i))
    }

    /// The `n` most populous cities; the whole dataset if `n` exceeds it.
    pub fn top_n(&self, n: usize) -> &[City] {
        &self.cities[..n.min(self.cities.len())]
    }

    /// Cities with `population >= threshold`, in rank order.
    pub fn cities_with_min_population(&self, threshold: u64) -> impl Iterator<Item = &City> + '_ {
        // Sorted descending, so the matching cities form a prefix.
        self.cities
            .iter()
            .take_while(move |c| c.population >= threshold)
    }

    /// The `k` cities ranked immediately above and below `city`.
    ///
    /// Returns `(preceding, following)`, both in rank order. Clamped at the
    /// ends of the list, so either side may hold fewer than `k` entries.
    pub fn neighbors_by_rank(&self, city: &City, k: usize) -> (&[City], &[City]) {
        let Some(rank) = self.rank_of(city) else {
            return (&[], &[]);
        };
        let idx = rank - 1;
        let before = &self.cities[idx.saturating_sub(k)..idx];
        let end = idx.saturating_add(1).saturating_add(k).min(self.cities.len());
        let after = &self.cities[idx + 1..end];
        (before, after)
    }

    /// Every other city with `population >= min_population`, paired with its
    /// distance from `city` and sorted nearest first.
    ///
    /// Equal distances keep rank order.
    pub fn cities_by_distance(&self, city: &City, min_population: u64) -> Vec<(&City, f64)> {
        let origin = city.coordinates();
        let own_rank = self.rank_of(city);

        let mut out: Vec<(&City, f64)> = self
            .cities_with_min_population(min_population)
            .filter(|c| Some(c.rank) != own_rank)
            .map(|c| (c, origin.distance_to(&c.coordinates())))
            .collect();
        out.sort_by(|a, b| a.1.total_cmp(&b.1));
        out
    }

    /// The `k` closest cities (population `>= min_population`), nearest first.
    pub fn nearest(&self, city: &City, k: usize, min_population: u64) -> Vec<(&City, f64)> {
        let mut all = self.cities_by_distance(city, min_population);
        all.truncate(k);
        all
    }

    /// The `k` most distant cities (population `>= min_population`),
    /// furthest first.
    pub fn furthest(&self, city: &City, k: usize, min_population: u64) -> Vec<(&City, f64)> {
        let all = self.cities_by_distance(city, min_population);
        all.into_iter().rev().take(k).collect()
    }
}

fn same_place(a: &City, b: &City) -> bool {
    a.name == b.name
        && a.country_code == b.country_code
        && a.population == b.population
        && a.latitude == b.latitude
        && a.longitude == b.longitude
}
