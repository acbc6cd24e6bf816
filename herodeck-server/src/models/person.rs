//! Synthetic people for the home page
//!
//! Nothing here touches the store. Output is random on every call; pass a
//! seeded RNG to [`generate_people`] when a test needs repeatable values.

use chrono::{Days, NaiveDate, Utc};
use fake::faker::address::en::CountryName;
use fake::faker::company::en::CompanyName;
use fake::faker::job::en::Title as JobTitle;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// People rendered per home page view
pub const PEOPLE_PER_PAGE: usize = 200;

/// Oldest generated date of birth, in years
const MAX_AGE_YEARS: u64 = 115;

const COLOR_NAMES: &[&str] = &[
    "AliceBlue", "Aqua", "Aquamarine", "Azure", "Beige", "Black", "Blue", "BlueViolet", "Brown",
    "Chartreuse", "Chocolate", "Coral", "CornflowerBlue", "Crimson", "Cyan", "DarkGreen",
    "DarkOrange", "DarkSlateGray", "DeepPink", "DodgerBlue", "FireBrick", "ForestGreen", "Fuchsia",
    "Gold", "GoldenRod", "Gray", "Green", "HotPink", "IndianRed", "Indigo", "Ivory", "Khaki",
    "Lavender", "LawnGreen", "LightBlue", "LightCoral", "Lime", "Linen", "Magenta", "Maroon",
    "MediumPurple", "MidnightBlue", "MintCream", "Navy", "Olive", "Orange", "Orchid", "PaleGreen",
    "Peru", "Pink", "Plum", "Purple", "Red", "RosyBrown", "RoyalBlue", "Salmon", "SeaGreen",
    "Sienna", "Silver", "SkyBlue", "SlateBlue", "SteelBlue", "Tan", "Teal", "Thistle", "Tomato",
    "Turquoise", "Violet", "Wheat", "White", "Yellow", "YellowGreen",
];

/// Generated person, discarded after rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: usize,
    pub name: String,
    pub job: String,
    pub company: String,
    pub location: String,
    pub dob: NaiveDate,
    pub favorite_color: String,
}

impl Person {
    /// Generate one person with the given id.
    pub fn fake_with_rng<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            name: Name().fake_with_rng(rng),
            job: JobTitle().fake_with_rng(rng),
            company: CompanyName().fake_with_rng(rng),
            location: CountryName().fake_with_rng(rng),
            dob: date_of_birth(rng),
            favorite_color: COLOR_NAMES
                .choose(rng)
                .copied()
                .unwrap_or("Black")
                .to_owned(),
        }
    }
}

/// Generate `count` people with ids `0..count`.
pub fn generate_people<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Person> {
    (0..count).map(|id| Person::fake_with_rng(id, rng)).collect()
}

/// Generate `count` people from the unseeded thread-local RNG.
pub fn random_people(count: usize) -> Vec<Person> {
    generate_people(&mut rand::thread_rng(), count)
}

fn date_of_birth<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    let today = Utc::now().date_naive();
    let days_back = rng.gen_range(0..=MAX_AGE_YEARS * 365);
    today.checked_sub_days(Days::new(days_back)).unwrap_or(today)
}
