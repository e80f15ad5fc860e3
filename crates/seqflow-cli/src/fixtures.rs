//! Demo domain records and the in-memory fixture databases.
//!
//! The databases expose restartable sequences with no mutation
//! surface; every demo run sees the same records in the same order.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use seqflow_core::{items, Items};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub born: NaiveDate,
    pub gender: Gender,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, born: NaiveDate, gender: Gender) -> Self {
        Person {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            born,
            gender,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years on the given date.
    pub fn age_on(&self, on: NaiveDate) -> i32 {
        let mut age = on.year() - self.born.year();
        if (on.month(), on.day()) < (self.born.month(), self.born.day()) {
            age -= 1;
        }
        age
    }

    /// Age in whole years today.
    pub fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, born {}, age {})",
            self.full_name(),
            self.gender,
            self.born,
            self.age()
        )
    }
}

/// A person with enrollment data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Student {
    pub person: Person,
    pub faculty: String,
    pub enrollment_year: i32,
}

impl Student {
    pub fn new(person: Person, faculty: &str, enrollment_year: i32) -> Self {
        Student {
            person,
            faculty: faculty.to_string(),
            enrollment_year,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — {}, enrolled {}",
            self.person.full_name(),
            self.faculty,
            self.enrollment_year
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn new(id: i32, name: &str) -> Self {
        Category {
            id,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
}

impl Product {
    pub fn new(id: i32, name: &str, category_id: i32) -> Self {
        Product {
            id,
            name: name.to_string(),
            category_id,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.id, self.name)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Fixture literals only; every triple below is a valid date.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Twenty-three persons; the odd total keeps the last page of the
/// pagination demo partial.
pub fn persons() -> Items<Person> {
    items(vec![
        Person::new("John", "Dow", date(1990, 3, 30), Gender::Male),
        Person::new("Jane", "Doe", date(1985, 7, 12), Gender::Female),
        Person::new("Emma", "Dalton", date(2008, 1, 25), Gender::Female),
        Person::new("Liam", "Drake", date(1979, 11, 2), Gender::Male),
        Person::new("Olivia", "Stone", date(1992, 5, 19), Gender::Female),
        Person::new("Noah", "Price", date(1981, 3, 4), Gender::Male),
        Person::new("Ava", "Dow", date(1981, 9, 27), Gender::Female),
        Person::new("Mason", "Reed", date(2005, 2, 14), Gender::Male),
        Person::new("Sophia", "Hale", date(1999, 8, 8), Gender::Female),
        Person::new("Ethan", "Cole", date(1975, 4, 21), Gender::Male),
        Person::new("Mia", "Duma", date(1996, 12, 30), Gender::Female),
        Person::new("Lucas", "Ward", date(1988, 6, 6), Gender::Male),
        Person::new("Amelia", "Frost", date(1981, 10, 17), Gender::Female),
        Person::new("Logan", "Pierce", date(1970, 1, 9), Gender::Male),
        Person::new("Harper", "Quinn", date(1993, 3, 15), Gender::Female),
        Person::new("Oliver", "Nash", date(1960, 7, 23), Gender::Male),
        Person::new("Ella", "Marsh", date(2002, 9, 5), Gender::Female),
        Person::new("James", "Dean", date(1984, 2, 2), Gender::Male),
        Person::new("Lily", "Vaughn", date(1979, 5, 28), Gender::Female),
        Person::new("Henry", "Bloom", date(1955, 8, 14), Gender::Male),
        Person::new("Grace", "Lund", date(1990, 11, 11), Gender::Female),
        Person::new("Jack", "Mercer", date(2010, 6, 1), Gender::Male),
        Person::new("Chloe", "Hart", date(1990, 4, 3), Gender::Female),
    ])
}

pub fn students() -> Items<Student> {
    items(vec![
        Student::new(
            Person::new("Sophia", "Hale", date(1999, 8, 8), Gender::Female),
            "Mathematics",
            2018,
        ),
        Student::new(
            Person::new("Ella", "Marsh", date(2002, 9, 5), Gender::Female),
            "Physics",
            2021,
        ),
        Student::new(
            Person::new("Mason", "Reed", date(2005, 2, 14), Gender::Male),
            "Mathematics",
            2023,
        ),
        Student::new(
            Person::new("Mia", "Duma", date(1996, 12, 30), Gender::Female),
            "Biology",
            2015,
        ),
        Student::new(
            Person::new("Jack", "Mercer", date(2010, 6, 1), Gender::Male),
            "Physics",
            2026,
        ),
    ])
}

pub fn categories() -> Items<Category> {
    items(vec![
        Category::new(1, "Laptops"),
        Category::new(2, "Phones"),
        Category::new(3, "Tablets"),
        Category::new(4, "Refrigerators"),
    ])
}

/// Thirteen products; the last one is an orphan (`category_id = -1`)
/// so the left-outer-join demo has an unmatched row.
pub fn products() -> Items<Product> {
    items(vec![
        Product::new(1, "Lenovo IdeaPad", 1),
        Product::new(2, "HP Envy", 1),
        Product::new(3, "Dell Latitude", 1),
        Product::new(4, "Samsung Galaxy Phone", 2),
        Product::new(5, "Huawei Phone", 2),
        Product::new(6, "Xiaomi Phone", 2),
        Product::new(7, "Nokia Phone", 2),
        Product::new(8, "iPhone", 2),
        Product::new(9, "Samsung Galaxy Tab", 3),
        Product::new(10, "Huawei Tablet", 3),
        Product::new(11, "Lenovo Tablet", 3),
        Product::new(12, "iPad", 3),
        Product::new(13, "Coca-Cola", -1),
    ])
}
