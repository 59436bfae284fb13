/// One year of dengue figures for the statistics chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearStats {
    pub year: u32,
    pub cases: u32,
    pub deaths: u32,
    pub prevention: u32,
}

const fn row(year: u32, cases: u32, deaths: u32, prevention: u32) -> YearStats {
    YearStats {
        year,
        cases,
        deaths,
        prevention,
    }
}

pub const YEARLY_STATS: [YearStats; 6] = [
    row(2018, 1200, 15, 800),
    row(2019, 1500, 20, 1000),
    row(2020, 1800, 25, 1200),
    row(2021, 1400, 18, 1500),
    row(2022, 1000, 12, 1800),
    row(2023, 800, 8, 2000),
];

/// Full-scale values for the chart's bars.
pub const CASES_SCALE: f32 = 2000.0;
pub const DEATHS_SCALE: f32 = 30.0;
pub const PREVENTION_SCALE: f32 = 2000.0;

/// Bar heights as fractions of full scale: (cases, deaths, prevention).
pub fn bar_fractions(stats: &YearStats) -> (f32, f32, f32) {
    (
        stats.cases as f32 / CASES_SCALE,
        stats.deaths as f32 / DEATHS_SCALE,
        stats.prevention as f32 / PREVENTION_SCALE,
    )
}
