//! Built-in gazetteer for place detection.
//!
//! Countries, UK/US regions and major world cities. Matching is
//! case-sensitive on whole words, so entries are written as they appear in
//! running text.

pub const GAZETTEER: &[&str] = &[
    // Countries
    "Argentina",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Denmark",
    "Egypt",
    "England",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "India",
    "Indonesia",
    "Ireland",
    "Israel",
    "Italy",
    "Japan",
    "Kenya",
    "Mexico",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Northern Ireland",
    "Norway",
    "Pakistan",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Scotland",
    "Singapore",
    "South Africa",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Thailand",
    "Turkey",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Vietnam",
    "Wales",
    // Cities
    "Amsterdam",
    "Athens",
    "Barcelona",
    "Beijing",
    "Berlin",
    "Birmingham",
    "Boston",
    "Brighton",
    "Bristol",
    "Brussels",
    "Buenos Aires",
    "Cairo",
    "Cambridge",
    "Cape Town",
    "Cardiff",
    "Chicago",
    "Copenhagen",
    "Dallas",
    "Delhi",
    "Dubai",
    "Dublin",
    "Edinburgh",
    "Glasgow",
    "Hamburg",
    "Helsinki",
    "Hong Kong",
    "Houston",
    "Istanbul",
    "Johannesburg",
    "Leeds",
    "Lisbon",
    "Liverpool",
    "London",
    "Los Angeles",
    "Madrid",
    "Manchester",
    "Melbourne",
    "Mexico City",
    "Miami",
    "Milan",
    "Minneapolis",
    "Montreal",
    "Moscow",
    "Mumbai",
    "Munich",
    "Nairobi",
    "New York",
    "Newcastle",
    "Nottingham",
    "Oslo",
    "Oxford",
    "Paris",
    "Prague",
    "Rome",
    "San Francisco",
    "Seattle",
    "Seoul",
    "Sheffield",
    "Shanghai",
    "Stockholm",
    "Sydney",
    "Tokyo",
    "Toronto",
    "Vancouver",
    "Vienna",
    "Warsaw",
    "Washington",
    "Zurich",
];
