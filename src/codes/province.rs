//! Canadian province and US state names to postal abbreviations.

use super::CodeResolver;

/// Resolves province, territory and state names to their two letter postal
/// codes. Keys match exactly, so text that already holds a code, or a name
/// from another country, resolves to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvinceTable;

impl ProvinceTable {
    pub fn lookup(text: &str) -> Option<&'static str> {
        CANADA
            .iter()
            .chain(UNITED_STATES)
            .find(|(name, _)| *name == text)
            .map(|(_, code)| *code)
    }
}

impl CodeResolver for ProvinceTable {
    fn resolve(&self, text: &str) -> Option<&'static str> {
        Self::lookup(text)
    }
}

/// Canada Post abbreviations, with French names alongside English ones.
const CANADA: &[(&str, &str)] = &[
    ("Alberta", "AB"),
    ("British Columbia", "BC"),
    ("Colombie-Britannique", "BC"),
    ("Manitoba", "MB"),
    ("New Brunswick", "NB"),
    ("Nouveau-Brunswick", "NB"),
    ("Newfoundland and Labrador", "NL"),
    ("Newfoundland", "NL"),
    ("Terre-Neuve-et-Labrador", "NL"),
    ("Northwest Territories", "NT"),
    ("Territoires du Nord-Ouest", "NT"),
    ("Nova Scotia", "NS"),
    ("Nouvelle-Écosse", "NS"),
    ("Nunavut", "NU"),
    ("Ontario", "ON"),
    ("Prince Edward Island", "PE"),
    ("Île-du-Prince-Édouard", "PE"),
    ("Quebec", "QC"),
    ("Québec", "QC"),
    ("Saskatchewan", "SK"),
    ("Yukon", "YT"),
    ("Yukon Territory", "YT"),
];

/// USPS abbreviations for states, the federal district and territories.
const UNITED_STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("American Samoa", "AS"),
    ("Guam", "GU"),
    ("Northern Mariana Islands", "MP"),
    ("Puerto Rico", "PR"),
    ("United States Virgin Islands", "VI"),
];
