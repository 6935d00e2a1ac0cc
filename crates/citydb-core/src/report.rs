// crates/citydb-core/src/report.rs

//! Console rendering of city reports and pairwise distances.
//!
//! Reports borrow from the [`CityDb`] they were built from and implement
//! [`fmt::Display`], so callers decide where the text goes.

use crate::geo::half_circumference_fraction;
use crate::model::{City, CityDb};
use std::fmt;

const HEAVY_RULE: &str = "==================================================";
const LIGHT_RULE: &str = "--------------------------------------------------";
/// Width of the label column in neighbour lists.
const LABEL_WIDTH: usize = 20;

/// How a city's state is spelled in its display name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameStyle {
    /// `"Portland, Oregon (OR), United States"`
    #[default]
    Full,
    /// `"Portland, OR, United States"`
    Abbreviated,
}

/// Canonical display name of a city.
///
/// Non-US cities are always `"{name}, {country}"`. A US city without a known
/// state code falls back to the same form.
pub fn display_name(city: &City, style: NameStyle) -> String {
    let Some(code) = city.us_state.as_deref().filter(|_| city.is_us()) else {
        return format!("{}, {}", city.name, city.country);
    };
    match (style, city.us_state_name.as_deref()) {
        (NameStyle::Full, Some(full)) => {
            format!("{}, {} ({}), {}", city.name, full, code, city.country)
        }
        _ => format!("{}, {}, {}", city.name, code, city.country),
    }
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"12,345km (61.61%)"`: rounded kilometres and share of the half
/// circumference.
pub fn format_distance(km: f64) -> String {
    format!(
        "{}km ({:.2}%)",
        group_thousands(km.round() as u64),
        half_circumference_fraction(km) * 100.0
    )
}

/// Knobs for [`CityReport::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Include furthest / nearest / closest-population lists.
    pub verbose: bool,
    /// Entries per list.
    pub extra: usize,
    /// Population floor for the furthest / nearest candidates.
    pub min_population: u64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            extra: 1,
            min_population: 100_000,
        }
    }
}

/// One entry of a neighbour list.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    pub city: &'a City,
    pub distance_km: f64,
}

impl<'a> From<(&'a City, f64)> for Neighbor<'a> {
    fn from((city, distance_km): (&'a City, f64)) -> Self {
        Self { city, distance_km }
    }
}

/// Everything printed for one city.
#[derive(Debug, Clone)]
pub struct CityReport<'a> {
    pub city: &'a City,
    pub rank: usize,
    pub verbose: bool,
    pub furthest: Vec<Neighbor<'a>>,
    pub nearest: Vec<Neighbor<'a>>,
    /// Cities ranked just above, then just below.
    pub closest_population: Vec<Neighbor<'a>>,
}

impl<'a> CityReport<'a> {
    pub fn build(db: &'a CityDb, city: &'a City, opts: &ReportOptions) -> Self {
        let rank = db.rank_of(city).unwrap_or(city.rank());
        let mut report = Self {
            city,
            rank,
            verbose: opts.verbose,
            furthest: Vec::new(),
            nearest: Vec::new(),
            closest_population: Vec::new(),
        };
        if !opts.verbose {
            return report;
        }

        let by_distance = db.cities_by_distance(city, opts.min_population);
        report.nearest = by_distance
            .iter()
            .take(opts.extra)
            .copied()
            .map(Neighbor::from)
            .collect();
        report.furthest = by_distance
            .iter()
            .rev()
            .take(opts.extra)
            .copied()
            .map(Neighbor::from)
            .collect();

        let (before, after) = db.neighbors_by_rank(city, opts.extra);
        report.closest_population = before
            .iter()
            .chain(after)
            .map(|c| Neighbor {
                city: c,
                distance_km: city.distance_to(c),
            })
            .collect();
        report
    }

    fn write_list(f: &mut fmt::Formatter<'_>, label: &str, list: &[Neighbor<'_>]) -> fmt::Result {
        writeln!(f, "{LIGHT_RULE}")?;
        let head = format!("{label}:");
        let pad = " ".repeat(LABEL_WIDTH);
        if list.is_empty() {
            return writeln!(f, "{head:<width$}(none)", width = LABEL_WIDTH);
        }
        for (i, n) in list.iter().enumerate() {
            let lead = if i == 0 { head.as_str() } else { "" };
            writeln!(
                f,
                "{lead:<width$}({}) {}",
                i + 1,
                display_name(n.city, NameStyle::Abbreviated),
                width = LABEL_WIDTH
            )?;
            writeln!(
                f,
                "{pad}- Population: {} ({})",
                group_thousands(n.city.population),
                n.city.rank()
            )?;
            writeln!(f, "{pad}- Distance: {}", format_distance(n.distance_km))?;
        }
        Ok(())
    }
}

impl fmt::Display for CityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEAVY_RULE}")?;
        writeln!(f, "{}", display_name(self.city, NameStyle::Full))?;
        writeln!(f, "{LIGHT_RULE}")?;
        writeln!(f, "Population: {}", group_thousands(self.city.population))?;
        writeln!(f, "Pop Rank: {}", self.rank)?;
        writeln!(
            f,
            "Coordinates: {:.4}, {:.4}",
            self.city.latitude, self.city.longitude
        )?;
        if self.verbose {
            Self::write_list(f, "Furthest cities", &self.furthest)?;
            Self::write_list(f, "Nearest cities", &self.nearest)?;
            Self::write_list(f, "Closest population", &self.closest_population)?;
        }
        writeln!(f, "{HEAVY_RULE}")?;
        writeln!(f)?;
        writeln!(f)
    }
}

/// Distance between two queried cities.
#[derive(Debug, Clone, Copy)]
pub struct DistanceReport<'a> {
    pub from: &'a City,
    pub to: &'a City,
    pub distance_km: f64,
}

impl<'a> DistanceReport<'a> {
    pub fn new(from: &'a City, to: &'a City) -> Self {
        Self {
            from,
            to,
            distance_km: from.distance_to(to),
        }
    }
}

impl fmt::Display for DistanceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "*** {} ----- {} ***",
            display_name(self.from, NameStyle::Abbreviated),
            display_name(self.to, NameStyle::Abbreviated)
        )?;
        writeln!(f, "    Distance: {}", format_distance(self.distance_km))?;
        writeln!(f)?;
        writeln!(f)
    }
}

/// Every unordered pair of `cities`, in input order: (0,1), (0,2), (1,2), ...
pub fn pairwise<'a>(cities: &[&'a City]) -> Vec<DistanceReport<'a>> {
    let mut out = Vec::new();
    for (i, &from) in cities.iter().enumerate() {
        for &to in &cities[i + 1..] {
            out.push(DistanceReport::new(from, to));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;
    use crate::model::{CountryTable, StateTable};

    fn sample() -> CityDb {
        let countries: CountryTable = [("US", "United States"), ("GB", "United Kingdom"), ("FR", "France")]
            .into_iter()
            .collect();
        let states: StateTable = [("NY", "New York")].into_iter().collect();
        let city = |name: &str, cc: &str, pop: u64, lat: f64, lon: f64, st: &str| {
            City::new(name, cc, pop, Coordinates { lat, lon }, &countries)
                .unwrap()
                .with_us_state(st, &states)
        };
        let cities = vec![
            city("New York", "US", 8_175_133, 40.7143, -74.006, "NY"),
            city("London", "GB", 7_556_900, 51.5074, -0.1278, ""),
            city("Paris", "FR", 2_138_551, 48.8566, 2.3522, ""),
            city("Buffalo", "US", 261_310, 42.8865, -78.8784, "NY"),
            city("Springfield", "US", 150_000, 39.8, -89.64, "IL"),
        ];
        CityDb::from_cities(countries, states, cities)
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(8_175_133), "8,175,133");
        assert_eq!(group_thousands(100_000), "100,000");
    }

    #[test]
    fn display_names() {
        let db = sample();
        let nyc = &db.cities()[0];
        assert_eq!(display_name(nyc, NameStyle::Full), "New York, New York (NY), United States");
        assert_eq!(display_name(nyc, NameStyle::Abbreviated), "New York, NY, United States");
        let paris = db.find_city("Paris", 0)[0];
        assert_eq!(display_name(paris, NameStyle::Full), "Paris, France");
        // IL is missing from the state table: the code is all we can show.
        let springfield = db.find_city("Springfield", 0)[0];
        assert_eq!(display_name(springfield, NameStyle::Full), "Springfield, IL, United States");
    }

    #[test]
    fn plain_report_layout() {
        let db = sample();
        let paris = db.find_city("Paris", 0)[0];
        let text = CityReport::build(&db, paris, &ReportOptions::default()).to_string();
        let expected = format!(
            "{HEAVY_RULE}\nParis, France\n{LIGHT_RULE}\nPopulation: 2,138,551\nPop Rank: 3\n\
             Coordinates: 48.8566, 2.3522\n{HEAVY_RULE}\n\n\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn verbose_report_lists() {
        let db = sample();
        let london = db.find_city("London", 0)[0];
        let opts = ReportOptions {
            verbose: true,
            extra: 1,
            min_population: 100_000,
        };
        let report = CityReport::build(&db, london, &opts);

        assert_eq!(report.nearest.len(), 1);
        assert_eq!(report.nearest[0].city.name, "Paris");
        assert!((report.nearest[0].distance_km - 343.0).abs() < 5.0);
        assert_eq!(report.furthest[0].city.name, "Springfield");
        let closest: Vec<_> = report.closest_population.iter().map(|n| n.city.name.as_str()).collect();
        assert_eq!(closest, ["New York", "Paris"]);

        let text = report.to_string();
        assert!(text.contains("Nearest cities:     (1) Paris, France\n"));
        assert!(text.contains("                    - Population: 2,138,551 (3)\n"));
        assert!(text.contains("Closest population: (1) New York, NY, United States\n"));
        assert!(text.contains("                    (2) Paris, France\n"));
    }

    #[test]
    fn empty_list_renders_none() {
        let db = sample();
        let nyc = &db.cities()[0];
        let opts = ReportOptions {
            verbose: true,
            extra: 1,
            min_population: 10_000_000,
        };
        let text = CityReport::build(&db, nyc, &opts).to_string();
        assert!(text.contains("Furthest cities:    (none)\n"));
    }

    #[test]
    fn pairwise_covers_every_pair_once() {
        let db = sample();
        let picked: Vec<&City> = db.cities().iter().take(3).collect();
        let pairs = pairwise(&picked);
        let labels: Vec<_> = pairs.iter().map(|p| (p.from.rank(), p.to.rank())).collect();
        assert_eq!(labels, [(1, 2), (1, 3), (2, 3)]);
        assert!(pairwise(&picked[..1]).is_empty());
    }

    #[test]
    fn distance_report_layout() {
        let db = sample();
        let london = db.find_city("London", 0)[0];
        let paris = db.find_city("Paris", 0)[0];
        let text = DistanceReport::new(london, paris).to_string();
        assert!(text.starts_with("*** London, United Kingdom ----- Paris, France ***\n    Distance: 34"));
        assert!(text.ends_with("%)\n\n\n"));
    }
}
