//! Static scenario data: the map preset, the explorer scenarios with their
//! known themes, the synonym table, and the opposing-value pairs.
//!
//! Slice declaration order is authoritative wherever "first match wins":
//! known-theme lookup iterates these tables top to bottom.

use super::model::Category;

/// A stakeholder preset used to seed the map widget.
pub struct MapPreset {
	pub name: &'static str,
	pub category: Category,
	pub concerns: &'static str,
	pub values: &'static str,
}

/// Kings Cross nightlife scenario for the stakeholder map.
pub const KINGS_CROSS_PRESET: &[MapPreset] = &[
	MapPreset {
		name: "Police",
		category: Category::Government,
		concerns: "crime, violence, public safety",
		values: "order, control",
	},
	MapPreset {
		name: "Venue Owners",
		category: Category::Business,
		concerns: "revenue, regulation, reputation",
		values: "profit, entertainment",
	},
	MapPreset {
		name: "Residents",
		category: Category::Community,
		concerns: "noise, safety, property values",
		values: "peace, quality of life",
	},
	MapPreset {
		name: "City Council",
		category: Category::Government,
		concerns: "tourism, reputation, safety",
		values: "economic growth, livability",
	},
	MapPreset {
		name: "Health Services",
		category: Category::Government,
		concerns: "alcohol harm, injuries, mental health",
		values: "wellbeing, prevention",
	},
	MapPreset {
		name: "Visitors",
		category: Category::Individual,
		concerns: "fun, safety, transport",
		values: "entertainment, experience",
	},
];

/// Word pairs whose co-occurrence across two stakeholders' values flags a
/// potential conflict.
pub const OPPOSING_VALUES: &[(&str, &str)] = &[
	("control", "freedom"),
	("order", "spontaneity"),
	("profit", "wellbeing"),
	("regulation", "deregulation"),
	("growth", "preservation"),
	("entertainment", "peace"),
	("control", "entertainment"),
];

/// Root word and its synonyms. A theme text containing any member of a group
/// (as a substring) pulls in the whole group during keyword expansion.
pub const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
	("host", &["hosting", "hospitality", "welcoming", "welcome", "care", "guest"]),
	("safe", &["safety", "security", "protection", "secure"]),
	("belong", &["belonging", "home", "place", "roots", "identity", "attachment"]),
	("dignity", &["respect", "worth", "esteem", "empowerment"]),
	("story", &["storytelling", "narrative", "history", "heritage", "memory", "voice"]),
	("learn", &["learning", "education", "knowledge", "literacy", "study"]),
	("community", &["togetherness", "collective", "shared", "social", "connection"]),
	("culture", &["cultural", "heritage", "arts", "literature"]),
	("growth", &["development", "opportunity", "potential", "progress", "aspiration"]),
	("platform", &["infrastructure", "foundation", "service", "institution"]),
	("festival", &["celebration", "event", "carnival", "gathering"]),
	("ecosystem", &["network", "system", "web", "environment"]),
	("steward", &["stewardship", "caretaking", "custodian", "maintenance"]),
	("discover", &["discovery", "exploration", "curiosity", "serendipity", "wonder"]),
	("entertain", &["entertainment", "fun", "nightlife", "enjoyment", "leisure", "recreation"]),
];

/// A stakeholder in an explorer scenario: fixed name, color, concern list.
pub struct ScenarioStakeholder {
	pub name: &'static str,
	pub color: &'static str,
	pub concerns: &'static [&'static str],
}

/// A predefined theme with an authoritative keyword and bridge list.
///
/// When a proposed theme matches a known theme, the bridge list overrides
/// concern-text matching entirely.
#[derive(Debug)]
pub struct KnownTheme {
	pub key: &'static str,
	pub keywords: &'static [&'static str],
	pub bridges: &'static [&'static str],
	pub description: &'static str,
}

/// An explorer scenario: stakeholders plus its known-theme table.
pub struct Scenario {
	pub key: &'static str,
	pub name: &'static str,
	pub stakeholders: &'static [ScenarioStakeholder],
	pub themes: &'static [KnownTheme],
}

impl Scenario {
	/// Look a scenario up by its select-value key.
	pub fn by_key(key: &str) -> Option<&'static Scenario> {
		SCENARIOS.iter().find(|s| s.key == key)
	}
}

/// All explorer scenarios, in UI order.
pub const SCENARIOS: &[Scenario] = &[
	Scenario {
		key: "kings-cross",
		name: "Kings Cross Entertainment District",
		stakeholders: &[
			ScenarioStakeholder {
				name: "Police",
				color: "#3b82f6",
				concerns: &[
					"public safety",
					"alcohol-fueled violence",
					"crime reduction",
					"late-night policing",
					"resource strain",
				],
			},
			ScenarioStakeholder {
				name: "Venue Owners",
				color: "#f59e0b",
				concerns: &[
					"business revenue",
					"entertainment experience",
					"customer attraction",
					"licensing freedom",
					"nightlife vibrancy",
				],
			},
			ScenarioStakeholder {
				name: "Residents",
				color: "#10b981",
				concerns: &[
					"noise reduction",
					"neighborhood safety",
					"quality of life",
					"property values",
					"peaceful living",
				],
			},
			ScenarioStakeholder {
				name: "Council",
				color: "#8b5cf6",
				concerns: &[
					"economic vitality",
					"public order",
					"urban reputation",
					"regulatory balance",
					"community wellbeing",
				],
			},
			ScenarioStakeholder {
				name: "Visitors",
				color: "#f43f5e",
				concerns: &[
					"fun experience",
					"safe night out",
					"entertainment variety",
					"transport access",
					"welcoming atmosphere",
				],
			},
		],
		themes: &[
			KnownTheme {
				key: "hosting",
				keywords: &[
					"host",
					"hosting",
					"hospitality",
					"welcoming",
					"welcome",
					"care",
					"guest",
					"experience",
					"managing",
					"stewardship",
				],
				bridges: &["Police", "Venue Owners", "Residents", "Council", "Visitors"],
				description: "Good hosts create environments where guests naturally behave well. This theme reframes every stakeholder as a host with responsibility for the collective experience.",
			},
			KnownTheme {
				key: "safety",
				keywords: &[
					"safe",
					"safety",
					"security",
					"protection",
					"secure",
					"wellbeing",
					"harm reduction",
					"prevention",
				],
				bridges: &["Police", "Residents", "Council"],
				description: "Safety connects the core concerns of those responsible for public order and quality of life, but misses the economic and entertainment dimensions.",
			},
			KnownTheme {
				key: "entertainment",
				keywords: &[
					"entertainment",
					"fun",
					"nightlife",
					"enjoyment",
					"leisure",
					"amusement",
					"recreation",
					"pleasure",
				],
				bridges: &["Venue Owners", "Visitors"],
				description: "Entertainment captures the economic and experiential dimensions but fails to address safety and residential concerns.",
			},
			KnownTheme {
				key: "festival",
				keywords: &["festival", "celebration", "event", "gathering", "carnival", "spectacle"],
				bridges: &["Venue Owners", "Visitors", "Council"],
				description: "A festival frame suggests organized, managed enjoyment with infrastructure and planning, bridging business, visitor, and governance concerns.",
			},
			KnownTheme {
				key: "community",
				keywords: &[
					"community",
					"neighborhood",
					"belonging",
					"togetherness",
					"shared",
					"collective",
				],
				bridges: &["Residents", "Council", "Visitors"],
				description: "Community connects those who live, govern, and visit the area but may not speak to commercial or policing priorities.",
			},
		],
	},
	Scenario {
		key: "social-housing",
		name: "Social Housing Renewal",
		stakeholders: &[
			ScenarioStakeholder {
				name: "Housing Authority",
				color: "#3b82f6",
				concerns: &[
					"cost efficiency",
					"building maintenance",
					"occupancy rates",
					"regulatory compliance",
					"asset management",
				],
			},
			ScenarioStakeholder {
				name: "Residents",
				color: "#10b981",
				concerns: &[
					"home pride",
					"personal dignity",
					"sense of belonging",
					"safe environment",
					"stable housing",
				],
			},
			ScenarioStakeholder {
				name: "Social Workers",
				color: "#f59e0b",
				concerns: &[
					"resident wellbeing",
					"mental health support",
					"community integration",
					"dignity of care",
					"vulnerability reduction",
				],
			},
			ScenarioStakeholder {
				name: "Local Business",
				color: "#8b5cf6",
				concerns: &[
					"customer base",
					"area reputation",
					"economic activity",
					"foot traffic",
					"local identity",
				],
			},
			ScenarioStakeholder {
				name: "Youth",
				color: "#f43f5e",
				concerns: &[
					"recreation spaces",
					"identity expression",
					"future opportunities",
					"social connection",
					"creative outlet",
				],
			},
		],
		themes: &[
			KnownTheme {
				key: "belonging",
				keywords: &[
					"belonging",
					"belong",
					"home",
					"place",
					"roots",
					"identity",
					"attachment",
					"ownership",
					"pride",
				],
				bridges: &["Housing Authority", "Residents", "Social Workers", "Local Business", "Youth"],
				description: "Belonging transforms housing from shelter into home. When people belong, they invest in their environment, creating value for every stakeholder.",
			},
			KnownTheme {
				key: "storytelling",
				keywords: &[
					"story",
					"storytelling",
					"narrative",
					"history",
					"heritage",
					"memory",
					"voice",
					"expression",
					"culture",
				],
				bridges: &["Residents", "Youth", "Local Business"],
				description: "Stories create identity and connection. Residents share histories, youth express aspirations, businesses build on local narrative and character.",
			},
			KnownTheme {
				key: "dignity",
				keywords: &[
					"dignity",
					"respect",
					"worth",
					"value",
					"esteem",
					"empowerment",
					"agency",
					"autonomy",
				],
				bridges: &["Residents", "Social Workers"],
				description: "Dignity centers the human experience of care and housing, connecting those who receive and provide support in a relationship of mutual respect.",
			},
			KnownTheme {
				key: "stewardship",
				keywords: &[
					"stewardship",
					"steward",
					"caretaking",
					"responsibility",
					"maintenance",
					"investment",
					"custodian",
				],
				bridges: &["Housing Authority", "Residents", "Local Business"],
				description: "Stewardship reframes the relationship from landlord-tenant to shared caretaking, where everyone has a stake in the environment.",
			},
			KnownTheme {
				key: "growth",
				keywords: &[
					"growth",
					"development",
					"learning",
					"opportunity",
					"potential",
					"aspiration",
					"progress",
				],
				bridges: &["Youth", "Social Workers", "Residents"],
				description: "Growth connects those seeking development and those supporting it, but may not engage the institutional and commercial stakeholders.",
			},
		],
	},
	Scenario {
		key: "library",
		name: "Library Transformation",
		stakeholders: &[
			ScenarioStakeholder {
				name: "Librarians",
				color: "#3b82f6",
				concerns: &[
					"knowledge curation",
					"professional purpose",
					"information access",
					"collection stewardship",
					"reader guidance",
				],
			},
			ScenarioStakeholder {
				name: "Community",
				color: "#10b981",
				concerns: &[
					"meeting space",
					"social connection",
					"local identity",
					"free access",
					"inclusive gathering",
				],
			},
			ScenarioStakeholder {
				name: "Students",
				color: "#f59e0b",
				concerns: &[
					"study environment",
					"research resources",
					"quiet space",
					"digital access",
					"learning support",
				],
			},
			ScenarioStakeholder {
				name: "Council",
				color: "#8b5cf6",
				concerns: &[
					"budget justification",
					"public value",
					"service efficiency",
					"political support",
					"measurable outcomes",
				],
			},
			ScenarioStakeholder {
				name: "Publishers",
				color: "#f43f5e",
				concerns: &[
					"content distribution",
					"author exposure",
					"reading culture",
					"intellectual property",
					"market access",
				],
			},
		],
		themes: &[
			KnownTheme {
				key: "learning ecosystem",
				keywords: &[
					"learning",
					"ecosystem",
					"education",
					"knowledge",
					"discovery",
					"understanding",
					"literacy",
					"wisdom",
					"growth",
				],
				bridges: &["Librarians", "Community", "Students", "Council", "Publishers"],
				description: "A learning ecosystem reframes the library from a book repository to a living network of knowledge creation and sharing that serves every stakeholder.",
			},
			KnownTheme {
				key: "third place",
				keywords: &[
					"third place",
					"gathering",
					"meeting",
					"social",
					"hangout",
					"commons",
					"agora",
					"living room",
					"hub",
				],
				bridges: &["Community", "Students"],
				description: "The third place (neither home nor work) captures the library as a social infrastructure, connecting those who need space for connection and study.",
			},
			KnownTheme {
				key: "cultural access",
				keywords: &[
					"culture",
					"cultural",
					"access",
					"exposure",
					"distribution",
					"curation",
					"heritage",
					"arts",
					"literature",
				],
				bridges: &["Librarians", "Publishers", "Community"],
				description: "Cultural access connects the keepers, creators, and consumers of culture in a shared mission of making knowledge and art available to all.",
			},
			KnownTheme {
				key: "public platform",
				keywords: &[
					"platform",
					"public",
					"civic",
					"infrastructure",
					"service",
					"institution",
					"foundation",
				],
				bridges: &["Council", "Community", "Librarians"],
				description: "Framing the library as public platform emphasizes its role as essential civic infrastructure, justifying investment and broadening purpose.",
			},
			KnownTheme {
				key: "discovery",
				keywords: &[
					"discovery",
					"exploration",
					"curiosity",
					"finding",
					"browsing",
					"serendipity",
					"wonder",
				],
				bridges: &["Students", "Librarians", "Publishers"],
				description: "Discovery centers the experience of finding something unexpected, connecting those who seek, curate, and create knowledge.",
			},
		],
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scenario_lookup_by_key() {
		assert!(Scenario::by_key("kings-cross").is_some());
		assert!(Scenario::by_key("library").is_some());
		assert!(Scenario::by_key("atlantis").is_none());
	}

	#[test]
	fn every_bridge_names_a_real_stakeholder() {
		for scenario in SCENARIOS {
			for theme in scenario.themes {
				for bridge in theme.bridges {
					assert!(
						scenario.stakeholders.iter().any(|s| s.name == *bridge),
						"{}: theme '{}' bridges unknown stakeholder '{}'",
						scenario.key,
						theme.key,
						bridge
					);
				}
			}
		}
	}
}
