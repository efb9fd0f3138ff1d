//! Curated mood lists served instead of generated ones.
//!
//! Matching is exact and case-sensitive ("Thrilling", not "thrilling"), and
//! the order of each list is part of its contract.

use crate::models::Movie;

struct CuratedMovie {
    title: &'static str,
    year: i32,
    imdb_rating: f64,
    platform: &'static str,
    description: &'static str,
    image_url: &'static str,
    trailer_url: Option<&'static str>,
}

impl CuratedMovie {
    fn to_movie(&self) -> Movie {
        Movie {
            title: self.title.to_string(),
            year: Some(self.year),
            imdb_rating: Some(self.imdb_rating),
            platform: Some(self.platform.to_string()),
            description: self.description.to_string(),
            image_url: Some(self.image_url.to_string()),
            trailer_url: self.trailer_url.map(String::from),
        }
    }
}

const CURATED_MOODS: &[(&str, &[CuratedMovie])] = &[("Thrilling", THRILLING), ("Emotional", EMOTIONAL)];

/// Returns the curated list for `mood`, or `None` when the mood should be generated.
pub fn curated_for_mood(mood: &str) -> Option<Vec<Movie>> {
    CURATED_MOODS
        .iter()
        .find(|(name, _)| *name == mood)
        .map(|(_, movies)| movies.iter().map(CuratedMovie::to_movie).collect())
}

/// Moods with a fixed list.
pub fn curated_moods() -> impl Iterator<Item = &'static str> {
    CURATED_MOODS.iter().map(|(name, _)| *name)
}

const THRILLING: &[CuratedMovie] = &[
    CuratedMovie {
        title: "Tehran",
        year: 2020,
        imdb_rating: 7.9,
        platform: "Apple TV+",
        description: "A Mossad agent goes deep undercover on a dangerous mission in Tehran that places her and everyone around her in dire jeopardy.",
        image_url: "https://picsum.photos/seed/tehran/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=n_L-rfS_I_4"),
    },
    CuratedMovie {
        title: "Fighter",
        year: 2024,
        imdb_rating: 7.2,
        platform: "Netflix",
        description: "Top IAF aviators assemble for a perilous mission to protect the nation from an imminent threat.",
        image_url: "https://picsum.photos/seed/fighter/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=6amIq_mP4xM"),
    },
    CuratedMovie {
        title: "Drishyam",
        year: 2015,
        imdb_rating: 8.2,
        platform: "Disney+",
        description: "Desperate measures are taken by a man who tries to save his family from the dark side of the law, after they commit an unexpected crime.",
        image_url: "https://picsum.photos/seed/drishyam/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=AuuX2j14NBg"),
    },
    CuratedMovie {
        title: "Ugly",
        year: 2013,
        imdb_rating: 8.0,
        platform: "Prime Video",
        description: "The case of a missing girl takes a dark turn as the investigation reveals a web of secrets and corruption among the dysfunctional people in her life.",
        image_url: "https://picsum.photos/seed/ugly/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=4ougQY2-zpk"),
    },
    CuratedMovie {
        title: "Ravanasura",
        year: 2023,
        imdb_rating: 6.3,
        platform: "Prime Video",
        description: "A junior lawyer known for his clever tactics gets entangled in a complex criminal case where nothing is as it seems.",
        image_url: "https://picsum.photos/seed/ravanasura/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=3dGj9L3n2bY"),
    },
    CuratedMovie {
        title: "Rahasya",
        year: 2015,
        imdb_rating: 7.6,
        platform: "JioCinema",
        description: "When a young girl is murdered in her own home, a CBI officer must navigate a maze of lies and hidden motives to find the real killer.",
        image_url: "https://picsum.photos/seed/rahasya/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=5-Q1SgYcYrQ"),
    },
    CuratedMovie {
        title: "Hacked",
        year: 2020,
        imdb_rating: 3.2,
        platform: "Zee5",
        description: "A young woman's life turns into a living nightmare when she is stalked by a teenage hacker who takes control of her digital life.",
        image_url: "https://picsum.photos/seed/hacked/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=cpx_i8aPoxA"),
    },
    CuratedMovie {
        title: "RAW (Romeo Akbar Walter)",
        year: 2019,
        imdb_rating: 6.5,
        platform: "Netflix",
        description: "A bank employee is recruited by India's intelligence agency for an undercover operation in Pakistan during the 1971 war.",
        image_url: "https://picsum.photos/seed/raw/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=HSHzY2M-T3I"),
    },
    CuratedMovie {
        title: "Special 26",
        year: 2013,
        imdb_rating: 8.0,
        platform: "Netflix",
        description: "A team of con artists pose as CBI officers to conduct bogus raids on corrupt politicians and businessmen.",
        image_url: "https://picsum.photos/seed/special26/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=Piy6FxlbVtA"),
    },
    CuratedMovie {
        title: "Silence... Can You Hear It?",
        year: 2021,
        imdb_rating: 6.7,
        platform: "Zee5",
        description: "A team of special crime officers investigate the mysterious murder of a high-profile victim, where every witness seems to be hiding something.",
        image_url: "https://picsum.photos/seed/silence/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=o8vW38L8aFw"),
    },
    CuratedMovie {
        title: "Kahaani",
        year: 2012,
        imdb_rating: 8.1,
        platform: "JioCinema",
        description: "A pregnant woman's search for her missing husband in Kolkata takes a mysterious turn as she delves deeper into the city's dark secrets.",
        image_url: "https://picsum.photos/seed/kahaani/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=j1wE-Da_O-g"),
    },
    CuratedMovie {
        title: "Talvar",
        year: 2015,
        imdb_rating: 8.1,
        platform: "Netflix",
        description: "An experienced investigator confronts several conflicting theories about the perpetrators of a violent double homicide.",
        image_url: "https://picsum.photos/seed/talvar/200/300",
        trailer_url: Some("https://www.youtube.com/watch?v=aQ2sI-3hG6s"),
    },
];

/// Hand-picked for this crate; no upstream fixture exists for this mood.
const EMOTIONAL: &[CuratedMovie] = &[
    CuratedMovie {
        title: "Taare Zameen Par",
        year: 2007,
        imdb_rating: 8.3,
        platform: "Netflix",
        description: "An art teacher discovers that a struggling eight-year-old is dyslexic and helps him find his voice through painting.",
        image_url: "https://picsum.photos/seed/taarezameenpar/200/300",
        trailer_url: None,
    },
    CuratedMovie {
        title: "Coco",
        year: 2017,
        imdb_rating: 8.4,
        platform: "Disney+",
        description: "A young musician crosses into the Land of the Dead to uncover his family's history and the truth about his great-great-grandfather.",
        image_url: "https://picsum.photos/seed/coco/200/300",
        trailer_url: None,
    },
    CuratedMovie {
        title: "Grave of the Fireflies",
        year: 1988,
        imdb_rating: 8.5,
        platform: "Netflix",
        description: "Two orphaned siblings struggle to survive in Japan during the final months of the Second World War.",
        image_url: "https://picsum.photos/seed/fireflies/200/300",
        trailer_url: None,
    },
    CuratedMovie {
        title: "Up",
        year: 2009,
        imdb_rating: 8.3,
        platform: "Disney+",
        description: "A widowed balloon salesman ties thousands of balloons to his house and sets off for South America, with a young stowaway aboard.",
        image_url: "https://picsum.photos/seed/up/200/300",
        trailer_url: None,
    },
    CuratedMovie {
        title: "The Pursuit of Happyness",
        year: 2006,
        imdb_rating: 8.0,
        platform: "Netflix",
        description: "A struggling salesman takes custody of his son as he pursues an unpaid internship that could change their lives.",
        image_url: "https://picsum.photos/seed/happyness/200/300",
        trailer_url: None,
    },
    CuratedMovie {
        title: "Manchester by the Sea",
        year: 2016,
        imdb_rating: 7.8,
        platform: "Prime Video",
        description: "A grieving handyman returns to his hometown to care for his teenage nephew after his brother dies.",
        image_url: "https://picsum.photos/seed/manchester/200/300",
        trailer_url: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thrilling_order_is_fixed() {
        let titles: Vec<String> = curated_for_mood("Thrilling")
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles.len(), 12);
        assert_eq!(titles.first().map(String::as_str), Some("Tehran"));
        assert_eq!(titles.last().map(String::as_str), Some("Talvar"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(curated_for_mood("thrilling").is_none());
        assert!(curated_for_mood("EMOTIONAL").is_none());
        assert!(curated_for_mood("Funny").is_none());
    }

    #[test]
    fn test_every_curated_movie_is_complete() {
        for mood in curated_moods() {
            for movie in curated_for_mood(mood).unwrap() {
                assert!(!movie.title.is_empty());
                assert!(!movie.description.is_empty());
                let rating = movie.imdb_rating.unwrap();
                assert!((0.0..=10.0).contains(&rating), "{} rating {rating}", movie.title);
            }
        }
    }
}
