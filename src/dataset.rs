/// Tipboard Dataset
///
/// The fixed restaurant-tips dataset: one record per table visit, with the
/// bill amount, the tip, and four categorical columns. The dataset is loaded
/// once at startup and never mutated afterwards; everything downstream
/// (filtered views, value boxes, chart specs) derives from it.

use serde::Serialize;

/// Sex of the bill payer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "Male" => Ok(Sex::Male),
            "Female" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: '{}'. Use 'Male' or 'Female'", s)),
        }
    }
}

/// Whether the party included smokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Smoker {
    Yes,
    No,
}

impl Smoker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Smoker::Yes => "Yes",
            Smoker::No => "No",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "Yes" => Ok(Smoker::Yes),
            "No" => Ok(Smoker::No),
            _ => Err(format!("Unknown smoker flag: '{}'. Use 'Yes' or 'No'", s)),
        }
    }
}

/// Day of the week. Only the four days observed in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Day {
    Thur,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Thur => "Thur",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "Thur" => Ok(Day::Thur),
            "Fri" => Ok(Day::Fri),
            "Sat" => Ok(Day::Sat),
            "Sun" => Ok(Day::Sun),
            _ => Err(format!(
                "Unknown day: '{}'. Use 'Thur', 'Fri', 'Sat' or 'Sun'",
                s
            )),
        }
    }
}

/// Meal service time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MealTime {
    Lunch,
    Dinner,
}

impl MealTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Lunch => "Lunch",
            MealTime::Dinner => "Dinner",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "Lunch" => Ok(MealTime::Lunch),
            "Dinner" => Ok(MealTime::Dinner),
            _ => Err(format!("Unknown meal time: '{}'. Use 'Lunch' or 'Dinner'", s)),
        }
    }
}

/// One of the four categorical columns, used as a chart color/split variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CategoryColumn {
    Sex,
    Smoker,
    Day,
    Time,
}

impl CategoryColumn {
    pub const ALL: [CategoryColumn; 4] = [
        CategoryColumn::Sex,
        CategoryColumn::Smoker,
        CategoryColumn::Day,
        CategoryColumn::Time,
    ];

    /// Column key as it appears in the dataset header.
    pub fn key(&self) -> &'static str {
        match self {
            CategoryColumn::Sex => "sex",
            CategoryColumn::Smoker => "smoker",
            CategoryColumn::Day => "day",
            CategoryColumn::Time => "time",
        }
    }

    /// Capitalized name for chart titles and legends.
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryColumn::Sex => "Sex",
            CategoryColumn::Smoker => "Smoker",
            CategoryColumn::Day => "Day",
            CategoryColumn::Time => "Time",
        }
    }

    /// The record's value in this column, as a display label.
    pub fn label(&self, record: &TipRecord) -> &'static str {
        match self {
            CategoryColumn::Sex => record.sex.as_str(),
            CategoryColumn::Smoker => record.smoker.as_str(),
            CategoryColumn::Day => record.day.as_str(),
            CategoryColumn::Time => record.time.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "sex" => Ok(CategoryColumn::Sex),
            "smoker" => Ok(CategoryColumn::Smoker),
            "day" => Ok(CategoryColumn::Day),
            "time" => Ok(CategoryColumn::Time),
            _ => Err(format!(
                "Unknown category column: '{}'. Use 'sex', 'smoker', 'day' or 'time'",
                s
            )),
        }
    }
}

/// A single restaurant visit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipRecord {
    /// Bill amount in dollars.
    pub total_bill: f64,
    /// Tip amount in dollars.
    pub tip: f64,
    pub sex: Sex,
    pub smoker: Smoker,
    pub day: Day,
    pub time: MealTime,
    /// Party size.
    pub size: u32,
}

impl TipRecord {
    /// Tip as a fraction of the bill (e.g. 0.15 for a 15% tip).
    pub fn tip_fraction(&self) -> f64 {
        self.tip / self.total_bill
    }
}

/// Immutable, process-lifetime collection of tip records.
///
/// Loaded once from CSV; there is no mutation API. The observed
/// (min, max) of `total_bill` is precomputed at load time and seeds the
/// bill-range input's bounds.
///
/// # Examples
///
/// ```
/// use tipboard::TipsDataset;
///
/// let csv = "total_bill,tip,sex,smoker,day,time,size\n\
///            16.99,1.01,Female,No,Sun,Dinner,2";
/// let data = TipsDataset::from_csv(csv).unwrap();
/// assert_eq!(data.len(), 1);
/// assert_eq!(data.bill_range(), (16.99, 16.99));
/// ```
#[derive(Debug, Clone)]
pub struct TipsDataset {
    records: Vec<TipRecord>,
    bill_range: (f64, f64),
}

/// Header columns expected in a tips CSV, in any order.
const COLUMNS: [&str; 7] = ["total_bill", "tip", "sex", "smoker", "day", "time", "size"];

impl TipsDataset {
    /// Load the canonical 244-row tips dataset bundled with the crate.
    pub fn bundled() -> Result<TipsDataset, String> {
        Self::from_csv(include_str!("../data/tips.csv"))
    }

    /// Parse a tips CSV with a header row naming the seven known columns.
    ///
    /// Returns an error describing the first offending row or value; no
    /// records are kept on error.
    pub fn from_csv(csv: &str) -> Result<TipsDataset, String> {
        let mut lines = csv.lines();
        let header = lines.next().ok_or("CSV is empty")?;

        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        let mut positions = [0usize; 7];
        for (slot, col) in positions.iter_mut().zip(COLUMNS.iter()) {
            *slot = names
                .iter()
                .position(|n| n == col)
                .ok_or_else(|| format!("Missing column '{}' in CSV header", col))?;
        }

        let mut records = Vec::new();
        for (line_no, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != names.len() {
                return Err(format!(
                    "Row {}: expected {} fields, got {}",
                    line_no + 1,
                    names.len(),
                    fields.len()
                ));
            }

            let field = |i: usize| fields[positions[i]];
            let record = TipRecord {
                total_bill: parse_f64(field(0), "total_bill", line_no + 1)?,
                tip: parse_f64(field(1), "tip", line_no + 1)?,
                sex: Sex::from_str(field(2))?,
                smoker: Smoker::from_str(field(3))?,
                day: Day::from_str(field(4))?,
                time: MealTime::from_str(field(5))?,
                size: field(6)
                    .parse::<u32>()
                    .map_err(|_| format!("Row {}: cannot parse '{}' as size", line_no + 1, field(6)))?,
            };
            records.push(record);
        }

        if records.is_empty() {
            return Err("CSV has no data rows".to_string());
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for r in &records {
            lo = lo.min(r.total_bill);
            hi = hi.max(r.total_bill);
        }

        Ok(TipsDataset {
            records,
            bill_range: (lo, hi),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TipRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[TipRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TipRecord> {
        self.records.iter()
    }

    /// Observed (min, max) of `total_bill`, computed once at load.
    pub fn bill_range(&self) -> (f64, f64) {
        self.bill_range
    }
}

fn parse_f64(value: &str, column: &str, row: usize) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Row {}: cannot parse '{}' as {}", row, value, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CSV: &str = "\
total_bill,tip,sex,smoker,day,time,size
16.99,1.01,Female,No,Sun,Dinner,2
10.34,1.66,Male,No,Sun,Dinner,3
8.58,1.92,Male,Yes,Fri,Lunch,1";

    #[test]
    fn test_from_csv_basic() {
        let data = TipsDataset::from_csv(SMALL_CSV).unwrap();
        assert_eq!(data.len(), 3);

        let first = data.get(0).unwrap();
        assert_eq!(first.total_bill, 16.99);
        assert_eq!(first.tip, 1.01);
        assert_eq!(first.sex, Sex::Female);
        assert_eq!(first.time, MealTime::Dinner);
        assert_eq!(first.size, 2);

        assert_eq!(data.bill_range(), (8.58, 16.99));
    }

    #[test]
    fn test_from_csv_reordered_header() {
        let csv = "\
tip,size,total_bill,time,day,smoker,sex
1.01,2,16.99,Dinner,Sun,No,Female";
        let data = TipsDataset::from_csv(csv).unwrap();
        assert_eq!(data.get(0).unwrap().total_bill, 16.99);
        assert_eq!(data.get(0).unwrap().sex, Sex::Female);
    }

    #[test]
    fn test_from_csv_errors() {
        assert!(TipsDataset::from_csv("").is_err());
        assert!(TipsDataset::from_csv("total_bill,tip\n1.0,2.0").is_err());

        let bad_value = "\
total_bill,tip,sex,smoker,day,time,size
oops,1.01,Female,No,Sun,Dinner,2";
        let err = TipsDataset::from_csv(bad_value).unwrap_err();
        assert!(err.contains("total_bill"), "unexpected error: {}", err);

        let bad_day = "\
total_bill,tip,sex,smoker,day,time,size
16.99,1.01,Female,No,Mon,Dinner,2";
        assert!(TipsDataset::from_csv(bad_day).is_err());
    }

    #[test]
    fn test_bundled_dataset() {
        let data = TipsDataset::bundled().unwrap();
        assert_eq!(data.len(), 244);
        assert_eq!(data.bill_range(), (3.07, 50.81));

        let lunches = data.iter().filter(|r| r.time == MealTime::Lunch).count();
        let dinners = data.iter().filter(|r| r.time == MealTime::Dinner).count();
        assert_eq!(lunches, 68);
        assert_eq!(dinners, 176);
    }

    #[test]
    fn test_tip_fraction() {
        let record = TipRecord {
            total_bill: 20.0,
            tip: 3.0,
            sex: Sex::Male,
            smoker: Smoker::No,
            day: Day::Sat,
            time: MealTime::Dinner,
            size: 2,
        };
        assert!((record.tip_fraction() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_category_column_labels() {
        let record = TipRecord {
            total_bill: 20.0,
            tip: 3.0,
            sex: Sex::Female,
            smoker: Smoker::Yes,
            day: Day::Fri,
            time: MealTime::Lunch,
            size: 4,
        };

        assert_eq!(CategoryColumn::Sex.label(&record), "Female");
        assert_eq!(CategoryColumn::Smoker.label(&record), "Yes");
        assert_eq!(CategoryColumn::Day.label(&record), "Fri");
        assert_eq!(CategoryColumn::Time.label(&record), "Lunch");
    }

    #[test]
    fn test_category_column_round_trip() {
        for col in CategoryColumn::ALL {
            assert_eq!(CategoryColumn::from_str(col.key()).unwrap(), col);
        }
        assert!(CategoryColumn::from_str("none").is_err());
    }
}
