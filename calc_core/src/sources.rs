//! Reference data the estimator's coefficients are based on.

/// A named external reference shown alongside the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSource {
    pub label: &'static str,
    pub url: &'static str,
}

pub const DATA_SOURCES: [DataSource; 3] = [
    DataSource {
        label: "Brick Data",
        url: "https://www.inchcalculator.com/brick-calculator/",
    },
    DataSource {
        label: "Cement Data",
        url: "https://www.omnicalculator.com/construction/cement",
    },
    DataSource {
        label: "Tile Data",
        url: "https://www.calculator.net/concrete-calculator.html",
    },
];

/// Intro text shown above the form
pub const INTRO: &str = "Use this app to estimate the materials needed for walls and flooring. \
Data is based on construction standards:";
