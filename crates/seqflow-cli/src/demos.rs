//! The demonstrations: one function per operator family, each building
//! a query over the fixture databases and driving it with a terminal
//! consumer.

use std::fmt;

use chrono::Datelike;
use clap::ValueEnum;
use serde::Serialize;

use seqflow_core::{by_fn, by_key, integers, items, Grouping, Sequence};
use seqflow_ops::Query;

use crate::config::{DemoConfig, OutputFormat};
use crate::fixtures::{categories, persons, products, students, Category, Gender, Person, Product};

type DemoResult = Result<(), Box<dyn std::error::Error>>;

/// Which demonstration to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    Numbers,
    FilterIndex,
    Project,
    Flatten,
    Order,
    Group,
    Partition,
    Pages,
    Union,
    Zip,
    Aggregate,
    Elements,
    Quantify,
    Join,
    GroupJoin,
    OuterJoin,
    Students,
}

/// (name, summary) pairs for the `list` subcommand, in run order.
pub fn catalog() -> Vec<(&'static str, &'static str)> {
    vec![
        ("numbers", "even values from the infinite counting source"),
        ("filter-index", "index-aware filtering over persons"),
        ("project", "plain and index-aware projection"),
        ("flatten", "flattening projections (powers, neighbor pairs)"),
        ("order", "stable multi-key ordering"),
        ("group", "grouping by birth year"),
        ("partition", "take and take-while"),
        ("pages", "skip/take pagination"),
        ("union", "union under natural and custom equality"),
        ("zip", "positional pairing"),
        ("aggregate", "count, min, average"),
        ("elements", "first/single/element-at and fallbacks"),
        ("quantify", "any, all, contains"),
        ("join", "inner hash join"),
        ("group-join", "group join"),
        ("outer-join", "left outer join via group join + default fill"),
        ("students", "grouping the student fixtures"),
    ]
}

pub fn run(kind: DemoKind, cfg: &DemoConfig) -> DemoResult {
    match kind {
        DemoKind::Numbers => numbers(cfg),
        DemoKind::FilterIndex => filter_index(cfg),
        DemoKind::Project => project(cfg),
        DemoKind::Flatten => flatten(cfg),
        DemoKind::Order => order(cfg),
        DemoKind::Group => group(cfg),
        DemoKind::Partition => partition(cfg),
        DemoKind::Pages => pages(cfg),
        DemoKind::Union => union(cfg),
        DemoKind::Zip => zip(cfg),
        DemoKind::Aggregate => aggregate(cfg),
        DemoKind::Elements => elements(cfg),
        DemoKind::Quantify => quantify(cfg),
        DemoKind::Join => join(cfg),
        DemoKind::GroupJoin => group_join(cfg),
        DemoKind::OuterJoin => outer_join(cfg),
        DemoKind::Students => students_demo(cfg),
    }
}

fn separator(label: &str) {
    println!("----------------------------------------------------");
    println!("{label}");
    println!("----------------------------------------------------");
}

fn emit<T: Serialize + fmt::Display>(rows: &[T], format: OutputFormat) -> DemoResult {
    match format {
        OutputFormat::Text => {
            for row in rows {
                println!("{row}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
    }
    Ok(())
}

/// A projected name together with its position in the query output.
#[derive(Debug, Clone, Serialize)]
struct NameAtIndex {
    index: usize,
    full_name: String,
}

impl fmt::Display for NameAtIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person at index {} is {}", self.index, self.full_name)
    }
}

/// A product paired with its (possibly sentinel) category.
#[derive(Debug, Clone, Serialize)]
struct ProductWithCategory {
    product: Product,
    category: Category,
}

impl fmt::Display for ProductWithCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}) {}, category: {}",
            self.product.id, self.product.name, self.category.name
        )
    }
}

#[derive(Debug, Clone, Serialize)]
struct CategoryProducts {
    category: Category,
    products: Vec<Product>,
}

fn numbers(cfg: &DemoConfig) -> DemoResult {
    // The source is infinite; `take` is what makes this terminate.
    let query = integers().filter(|n| n % 2 == 0).take(cfg.take_count);
    emit(&query.to_vec(), cfg.format)
}

fn filter_index(cfg: &DemoConfig) -> DemoResult {
    let query = persons().filter_indexed(|person, idx| {
        person.age() > 14 && person.last_name.to_ascii_lowercase().starts_with('d') && idx % 2 == 1
    });
    emit(&query.to_vec(), cfg.format)
}

fn project(cfg: &DemoConfig) -> DemoResult {
    let names = persons().map(|person| person.full_name());
    emit(&names.to_vec(), cfg.format)?;

    separator("Indexed projection");
    let indexed = persons()
        .filter(|person| person.age() > 14)
        .map_indexed(|person, index| NameAtIndex {
            index,
            full_name: person.full_name(),
        });
    emit(&indexed.to_vec(), cfg.format)
}

fn flatten(cfg: &DemoConfig) -> DemoResult {
    let powers = items(vec![1i64, 2, 3, 4]).flat_map(|n| {
        let n = *n;
        items(vec![n, n * n, n * n * n])
    });
    emit(&powers.to_vec(), cfg.format)?;

    separator("Neighbor pairs");
    let seconds = items(vec![4i32, 5]);
    let pairs = items(vec![1i32, 2, 3, 4])
        .flat_map_with(move |_| seconds.clone(), |a, b| (*a, b))
        .filter(|(a, b)| (a - b).abs() == 1)
        .map(|(a, b)| format!("({a}, {b})"));
    emit(&pairs.to_vec(), cfg.format)
}

fn order(cfg: &DemoConfig) -> DemoResult {
    let query = persons()
        .filter(|person| {
            let age = person.age();
            age > 20 && age < 40
        })
        .order_by(|person| person.age())
        .then_by_desc(|person| person.last_name.clone());
    emit(&query.to_vec(), cfg.format)
}

fn group(cfg: &DemoConfig) -> DemoResult {
    // Groups come out in first-seen order; sorting them is an explicit
    // second stage over the group keys.
    let groups = persons()
        .filter(|person| person.age() > 30)
        .group_by(|person| person.born.year())
        .order_by(|group| *group.key());
    match cfg.format {
        OutputFormat::Text => {
            for group in groups.produce() {
                println!("Born in {}:", group.key());
                for person in group.produce() {
                    println!("  {person}");
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&groups.to_vec())?),
    }
    Ok(())
}

fn partition(cfg: &DemoConfig) -> DemoResult {
    let over_thirty = persons().filter(|person| person.age() > 30);
    println!("{} persons over 30", over_thirty.count());
    let query = over_thirty.take(cfg.take_count);
    emit(&query.to_vec(), cfg.format)?;

    separator("Youngest while under 30");
    let query = persons()
        .order_by(|person| person.age())
        .take_while(|person| person.age() < 30);
    emit(&query.to_vec(), cfg.format)
}

fn pages(cfg: &DemoConfig) -> DemoResult {
    let sorted = persons()
        .order_by(|person| person.last_name.clone())
        .then_by(|person| person.first_name.clone());
    let total = sorted.count();
    let page_count = total.div_ceil(cfg.page_size);

    let mut all_pages: Vec<Vec<Person>> = Vec::with_capacity(page_count);
    for number in 1..=page_count {
        all_pages.push(sorted.clone().page(number, cfg.page_size).to_vec());
    }

    match cfg.format {
        OutputFormat::Text => {
            for (number, page) in all_pages.iter().enumerate() {
                println!("----------------");
                println!("Page {}", number + 1);
                for person in page {
                    println!("{person}");
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&all_pages)?),
    }
    Ok(())
}

fn union(cfg: &DemoConfig) -> DemoResult {
    let alice = persons().element_at(0)?;
    let bob = persons().element_at(1)?;
    let carol = persons().element_at(2)?;
    let first = items(vec![alice.clone(), bob]);
    // The re-cased copy is distinct under natural equality but equal
    // under the strategy below.
    let second = items(vec![
        Person::new(
            &alice.first_name.to_ascii_uppercase(),
            &alice.last_name,
            alice.born,
            alice.gender,
        ),
        carol,
    ]);
    let same_person = by_key(|person: &Person| {
        (
            person.first_name.to_ascii_lowercase(),
            person.last_name.to_ascii_lowercase(),
            person.gender,
            person.born,
        )
    });
    let query = first.union_with(second, same_person);
    emit(&query.to_vec(), cfg.format)?;

    separator("Numbers under natural equality");
    let query = items(vec![1, 2, 3]).union(items(vec![2, 3, 4]));
    emit(&query.to_vec(), cfg.format)
}

fn zip(cfg: &DemoConfig) -> DemoResult {
    let labels = items(vec![
        "label".to_string(),
        "test".to_string(),
        "hello".to_string(),
        "another".to_string(),
    ]);
    let query = items(vec![1, 2, 3]).zip_with(labels, |n, label| format!("{label}{n}"));
    emit(&query.to_vec(), cfg.format)
}

fn aggregate(_cfg: &DemoConfig) -> DemoResult {
    println!("numbers: {}", items(vec![1, 2, 3, 4]).count());
    println!("persons: {}", persons().count());
    println!(
        "persons with a D name: {}",
        persons().count_where(|person| person.last_name.to_ascii_lowercase().starts_with('d'))
    );

    let small = items(vec![5, 4, 3, 2, 1]);
    println!("min: {}", small.min()?);
    println!("average: {}", small.average()?);

    let min_age = persons().min_of(|person| person.age())?;
    println!("min age: {min_age}");
    for person in persons().filter(move |person| person.age() == min_age).produce() {
        println!("  {person}");
    }
    println!(
        "average age: {:.2}",
        persons().average_of(|person| f64::from(person.age()))?
    );
    Ok(())
}

fn elements(_cfg: &DemoConfig) -> DemoResult {
    let odds = items(vec![5, 3, 1]);
    println!(
        "first even or fallback: {}",
        odds.first_where_or(|n| n % 2 == 0, 0)
    );

    match persons().first_where(|person| person.last_name.to_ascii_lowercase().starts_with('q')) {
        Ok(person) => println!("{person}"),
        Err(error) => println!("No match! ({error})"),
    }

    let mixed = items(vec![5, 4, 3]);
    println!("single even: {}", mixed.single_where(|n| n % 2 == 0)?);
    println!(
        "single divisible by six, or fallback: {}",
        odds.single_where_or(|n| n % 6 == 0, 0)?
    );

    println!("element at 2: {}", mixed.element_at(2)?);
    println!(
        "element at 20 or default: {}",
        mixed.element_at_or_default(20)
    );
    Ok(())
}

fn quantify(_cfg: &DemoConfig) -> DemoResult {
    println!(
        "any even in [1, 5]: {}",
        items(vec![1, 5]).any_where(|n| n % 2 == 0)
    );

    if persons().any_where(|person| person.age() == 45) {
        println!("{}", persons().first_where(|person| person.age() == 45)?);
    } else {
        println!("No person of 45");
    }

    println!(
        "all female: {}",
        persons().all(|person| person.gender == Gender::Female)
    );

    println!(
        "contains 13: {}",
        items(vec![1, 2, 3, 4, 5]).contains(&13)
    );

    let first = persons().first()?;
    println!("contains first person: {}", persons().contains(&first));

    // A re-cased copy: not equal naturally, equal under the relaxed
    // comparison.
    let clone = Person::new(
        &first.first_name.to_ascii_uppercase(),
        &first.last_name,
        first.born,
        first.gender,
    );
    println!("contains re-cased copy: {}", persons().contains(&clone));
    let relaxed = by_fn(|a: &Person, b: &Person| {
        a.first_name.eq_ignore_ascii_case(&b.first_name)
            && a.last_name.eq_ignore_ascii_case(&b.last_name)
            && a.gender == b.gender
            && a.born == b.born
    });
    println!(
        "contains re-cased copy, relaxed: {}",
        persons().contains_with(&clone, &relaxed)
    );
    Ok(())
}

fn join(cfg: &DemoConfig) -> DemoResult {
    let query = products().join(
        categories(),
        |product| product.category_id,
        |category| category.id,
        |product, category| ProductWithCategory {
            product: product.clone(),
            category,
        },
    );
    emit(&query.to_vec(), cfg.format)
}

fn group_join(cfg: &DemoConfig) -> DemoResult {
    let query = categories().group_join(
        products(),
        |category| category.id,
        |product| product.category_id,
        |category, group: Grouping<i32, Product>| CategoryProducts {
            category,
            products: group.to_vec(),
        },
    );
    match cfg.format {
        OutputFormat::Text => {
            for row in query.produce() {
                println!("{}", row.category);
                for product in &row.products {
                    println!("    - {product}");
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&query.to_vec())?),
    }
    Ok(())
}

fn outer_join(cfg: &DemoConfig) -> DemoResult {
    let sentinel = Category::new(-1, "N/A");
    let query = products()
        .group_join(
            categories(),
            |product| product.category_id,
            |category| category.id,
            |product, group| (product, group),
        )
        .flat_map_with(
            move |pair| pair.1.clone().default_if_empty(sentinel.clone()),
            |pair, category| ProductWithCategory {
                product: pair.0.clone(),
                category,
            },
        );
    emit(&query.to_vec(), cfg.format)
}

fn students_demo(cfg: &DemoConfig) -> DemoResult {
    let groups = students()
        .group_by(|student| student.faculty.clone())
        .order_by(|group| group.key().clone());
    match cfg.format {
        OutputFormat::Text => {
            for group in groups.produce() {
                println!("{}:", group.key());
                for student in group.produce() {
                    println!("  {student}");
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&groups.to_vec())?),
    }
    Ok(())
}
