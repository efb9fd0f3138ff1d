//! Fixed home-page shelves. No generation involved.

use axum::Json;
use serde::Serialize;

use crate::models::Movie;

/// (title, year, imdb rating, platform, description)
type Entry = (&'static str, i32, f64, &'static str, &'static str);

#[derive(Debug, Clone, Serialize)]
pub struct Shelf {
    pub title: &'static str,
    pub movies: Vec<Movie>,
}

const SHELVES: &[(&str, &[Entry])] = &[
    ("Trending", TRENDING),
    ("Movies", MOVIES),
    ("Sports", SPORTS),
    ("Drama", DRAMA),
    ("Web Series", WEB_SERIES),
    ("TV Shows", TV_SHOWS),
];

/// All shelves in display order.
pub fn shelves() -> Vec<Shelf> {
    SHELVES
        .iter()
        .map(|&(title, entries)| Shelf {
            title,
            movies: entries.iter().map(to_movie).collect(),
        })
        .collect()
}

fn to_movie(&(title, year, rating, platform, description): &Entry) -> Movie {
    Movie::new(title, description)
        .with_year(year)
        .with_rating(rating)
        .with_platform(platform)
}

/// GET /api/v1/catalog
pub async fn handle_catalog() -> Json<Vec<Shelf>> {
    Json(shelves())
}

const TRENDING: &[Entry] = &[
    ("Cybernetic City", 2024, 8.5, "Netflix", "In a neon-lit metropolis, a detective hunts a rogue AI."),
    ("The Last Kingdom", 2023, 8.9, "Prime Video", "A historical epic of war and honor."),
    ("Echoes of Tomorrow", 2024, 8.2, "Hulu", "A sci-fi thriller about time loops and destiny."),
    ("Galaxy Runners", 2023, 7.9, "Disney+", "A space opera adventure."),
    ("The Silent Witness", 2024, 8.6, "Max", "A crime drama with a shocking twist."),
];

const MOVIES: &[Entry] = &[
    ("Inception", 2010, 8.8, "Netflix", "A thief who steals corporate secrets through use of dream-sharing technology."),
    ("Parasite", 2019, 8.5, "Hulu", "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan."),
    ("The Grand Budapest Hotel", 2014, 8.1, "Disney+", "The adventures of Gustave H, a legendary concierge at a famous hotel from the fictional Republic of Zubrowka between the first and second World Wars."),
    ("Mad Max: Fury Road", 2015, 8.1, "Max", "In a post-apocalyptic wasteland, a woman rebels against a tyrannical ruler in search for her homeland with the help of a group of female prisoners."),
    ("Spider-Man: Into the Spider-Verse", 2018, 8.4, "Netflix", "Teen Miles Morales becomes the Spider-Man of his universe, and must join with five spider-powered individuals from other dimensions to stop a threat for all realities."),
];

const SPORTS: &[Entry] = &[
    ("Formula 1: Drive to Survive", 2024, 8.6, "Netflix", "Go behind the scenes of the high-stakes world of Formula 1 racing."),
    ("The Last Dance", 2020, 9.1, "Netflix", "A definitive account of Michael Jordan's career and the 1990s Chicago Bulls."),
    ("All or Nothing: Manchester City", 2018, 8.8, "Prime Video", "Follow Manchester City F.C. through their record-breaking 2017-18 season."),
    ("Sunderland 'Til I Die", 2018, 8.2, "Netflix", "The passionate story of Sunderland AFC's fall from the Premier League."),
    ("Cheer", 2020, 8.1, "Netflix", "The competitive world of college cheerleading at Navarro College."),
];

const DRAMA: &[Entry] = &[
    ("The Crown", 2016, 8.6, "Netflix", "Follows the political rivalries and romance of Queen Elizabeth II's reign and the events that shaped the second half of the 20th century."),
    ("Succession", 2018, 8.8, "Max", "The Roy family is known for controlling the biggest media and entertainment company in the world. However, their world changes when their father steps down from the company."),
    ("Chernobyl", 2019, 9.4, "Max", "In April 1986, an explosion at the Chernobyl nuclear power plant in the Union of Soviet Socialist Republics becomes one of the world's worst man-made catastrophes."),
    ("Better Call Saul", 2015, 8.9, "Netflix", "The trials and tribulations of criminal lawyer Jimmy McGill in the time before he established his strip-mall law office in Albuquerque, New Mexico."),
    ("The Handmaid's Tale", 2017, 8.4, "Hulu", "Set in a dystopian future, a woman is forced to live as a concubine under a fundamentalist theocratic dictatorship."),
];

const WEB_SERIES: &[Entry] = &[
    ("Stranger Things", 2016, 8.7, "Netflix", "When a young boy disappears, his mother, a police chief and his friends must confront terrifying supernatural forces in order to get him back."),
    ("The Boys", 2019, 8.7, "Prime Video", "A group of vigilantes set out to take down corrupt superheroes who abuse their superpowers."),
    ("Fleabag", 2016, 8.7, "Prime Video", "A dry-witted woman, known only as Fleabag, has no filter as she navigates life and love in London while trying to cope with tragedy."),
    ("Black Mirror", 2011, 8.8, "Netflix", "An anthology series exploring a twisted, high-tech multiverse where humanity's greatest innovations and darkest instincts collide."),
    ("The Witcher", 2019, 8.2, "Netflix", "Geralt of Rivia, a solitary monster hunter, struggles to find his place in a world where people often prove more wicked than beasts."),
];

const TV_SHOWS: &[Entry] = &[
    ("Breaking Bad", 2008, 9.5, "Netflix", "A high school chemistry teacher diagnosed with inoperable lung cancer turns to manufacturing and selling methamphetamine in order to secure his family's future."),
    ("Game of Thrones", 2011, 9.2, "Max", "Nine noble families fight for control over the lands of Westeros, while an ancient enemy returns after being dormant for millennia."),
    ("The Office", 2005, 9.0, "Peacock", "A mockumentary on a group of typical office workers, where the workday consists of ego clashes, inappropriate behavior, and tedium."),
    ("Friends", 1994, 8.9, "Max", "Follows the personal and professional lives of six twenty to thirty-something-year-old friends living in Manhattan."),
    ("Sherlock", 2010, 9.1, "BBC iPlayer", "A modern update finds the famous sleuth and his doctor partner solving crime in 21st century London."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_order() {
        let titles: Vec<&str> = shelves().iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Trending", "Movies", "Sports", "Drama", "Web Series", "TV Shows"]
        );
    }

    #[test]
    fn test_every_shelf_has_five_complete_movies() {
        for shelf in shelves() {
            assert_eq!(shelf.movies.len(), 5, "{}", shelf.title);
            for movie in &shelf.movies {
                assert!(movie.year.is_some());
                assert!(movie.platform.is_some());
                assert!(!movie.description.is_empty());
            }
        }
    }

    #[test]
    fn test_shelf_serializes_camel_case_movies() {
        let json = serde_json::to_value(&shelves()[0]).unwrap();
        assert_eq!(json["title"], "Trending");
        assert_eq!(json["movies"][0]["imdbRating"], 8.5);
    }
}
