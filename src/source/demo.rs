//! Synthetic employee data set for the demo binary and integration tests.

use crate::source::VecSource;
use crate::view::table::TableRow;
use chrono::NaiveDate;

/// One demo row: an employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Stable record id.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Department name.
    pub department: String,
    /// Age in years.
    pub age: u32,
    /// Date of joining.
    pub joined: NaiveDate,
}

impl TableRow for Employee {
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.department.clone(),
            self.age.to_string(),
            self.joined.format("%Y-%m-%d").to_string(),
        ]
    }
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Tony", "Niklaus", "Margaret", "John",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Hoare", "Wirth", "Hamilton",
    "Backus",
];

const DEPARTMENTS: &[&str] = &["Engineering", "Research", "Operations", "Support"];

/// Generate `count` deterministic employees.
pub fn seed_employees(count: usize) -> Vec<Employee> {
    let epoch = NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid seed date");
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len() + i) % LAST_NAMES.len()];
            Employee {
                id: i as u32 + 1,
                name: format!("{first} {last}"),
                department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
                age: 22 + ((i * 7) % 43) as u32,
                joined: epoch + chrono::Days::new((i as u64 * 137) % 3650),
            }
        })
        .collect()
}

/// A page source over the demo data with comparators for every sortable
/// column of the demo table.
pub fn employee_source(count: usize, page_size: u32) -> VecSource<Employee> {
    let mut source = VecSource::new(seed_employees(count), page_size);
    source.register_comparator("id", |a: &Employee, b: &Employee| a.id.cmp(&b.id));
    source.register_comparator("name", |a: &Employee, b: &Employee| a.name.cmp(&b.name));
    source.register_comparator("department", |a: &Employee, b: &Employee| {
        a.department.cmp(&b.department)
    });
    source.register_comparator("age", |a: &Employee, b: &Employee| a.age.cmp(&b.age));
    source.register_comparator("joined", |a: &Employee, b: &Employee| {
        a.joined.cmp(&b.joined)
    });
    source
}
