//! HTML rendering for the browser routes.
//!
//! All pages use [maud](https://maud.lambda.xyz/) so every dynamic value is
//! escaped at render time.

pub mod format;

use maud::{DOCTYPE, Markup, html};
use orbis_core::{Country, PopulationStats};

use self::format::{group_average, group_digits};

/// Shared page shell.
fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Orbis" }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "Orbis" }
                    nav {
                        a href="/countries" { "All countries" }
                    }
                }
                main { (body) }
            }
        }
    }
}

fn search_form() -> Markup {
    html! {
        form class="search" action="/country" method="get" {
            input type="text" name="country" placeholder="Country name" required;
            button type="submit" { "Search" }
        }
    }
}

/// Landing page with the search form.
pub fn home_page() -> Markup {
    layout(
        "Countries",
        html! {
            h1 { "Explore the world's countries" }
            p class="tagline" { "Look up a country by name, or browse the full list with population statistics." }
            (search_form())
        },
    )
}

/// Detail page for a single country.
pub fn country_page(country: &Country) -> Markup {
    layout(
        &country.name,
        html! {
            article class="country" {
                @if !country.flag_url.is_empty() {
                    img class="flag" src=(country.flag_url) alt={ "Flag of " (country.name) };
                }
                h1 { (country.name) }
                dl {
                    dt { "Capital" }
                    dd {
                        @if country.capital.is_empty() {
                            "None"
                        } @else {
                            (country.capital.join(", "))
                        }
                    }
                    dt { "Population" }
                    dd { (group_digits(country.population)) }
                    dt { "Region" }
                    dd {
                        @if country.region.is_empty() { "Unknown" } @else { (country.region) }
                    }
                }
            }
            (search_form())
        },
    )
}

/// Listing of every country plus population statistics.
///
/// `stats` is `None` when the store is empty.
pub fn countries_page(countries: &[Country], stats: Option<&PopulationStats>) -> Markup {
    layout(
        "All countries",
        html! {
            h1 { "All countries" }
            @match stats {
                Some(stats) => {
                    section class="stats" {
                        div class="stat" {
                            span class="stat-label" { "Total population" }
                            span class="stat-value" { (group_digits(stats.total_population)) }
                        }
                        div class="stat" {
                            span class="stat-label" { "Average population" }
                            span class="stat-value" { (group_average(stats.average_population)) }
                        }
                        div class="stat" {
                            span class="stat-label" { "Most populated" }
                            span class="stat-value" { (stats.most_populated) }
                        }
                    }
                }
                None => {
                    p class="empty" {
                        "No countries stored yet. POST to /filldb to load the dataset."
                    }
                }
            }
            @if !countries.is_empty() {
                table class="countries" {
                    thead {
                        tr {
                            th { "Flag" }
                            th { "Name" }
                            th { "Capital" }
                            th { "Population" }
                            th { "Region" }
                        }
                    }
                    tbody {
                        @for country in countries {
                            tr {
                                td {
                                    @if !country.flag_url.is_empty() {
                                        img class="flag-small" src=(country.flag_url) alt="";
                                    }
                                }
                                td {
                                    a href={ "/country?country=" (urlencode(&country.name)) } { (country.name) }
                                }
                                td { (country.capital.join(", ")) }
                                td class="num" { (group_digits(country.population)) }
                                td { (country.region) }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Generic error page.
pub fn error_page(title: &str, message: &str) -> Markup {
    layout(
        title,
        html! {
            section class="error-page" {
                h1 { (title) }
                p { (message) }
                a href="/" { "Back to search" }
            }
        },
    )
}

/// Form-encode a value for use in a query string.
fn urlencode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, population: u64) -> Country {
        Country {
            name: name.to_string(),
            capital: vec!["Capital City".to_string()],
            population,
            region: "Europe".to_string(),
            flag_url: "https://flagcdn.com/w320/xx.png".to_string(),
        }
    }

    #[test]
    fn country_page_shows_fields() {
        let html = country_page(&country("France", 67_391_582)).into_string();
        assert!(html.contains("<h1>France</h1>"));
        assert!(html.contains("Capital City"));
        assert!(html.contains("67\u{202F}391\u{202F}582"));
        assert!(html.contains("https://flagcdn.com/w320/xx.png"));
    }

    #[test]
    fn country_page_escapes_names() {
        let html = country_page(&country("<script>", 1)).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn countries_page_with_stats() {
        let countries = vec![country("Andorra", 10), country("Canada", 30)];
        let stats = PopulationStats {
            total_population: 40,
            average_population: 20.0,
            most_populated: "Canada".to_string(),
        };
        let html = countries_page(&countries, Some(&stats)).into_string();
        assert!(html.contains("Most populated"));
        assert!(html.contains("/country?country=Andorra"));
        assert!(html.find("Andorra").unwrap() < html.find("/country?country=Canada").unwrap());
    }

    #[test]
    fn countries_page_without_stats() {
        let html = countries_page(&[], None).into_string();
        assert!(html.contains("No countries stored yet"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn urlencode_reserved_characters() {
        assert_eq!(urlencode("Côte d'Ivoire"), "C%C3%B4te+d%27Ivoire");
        assert_eq!(urlencode("Bosnia & Herzegovina"), "Bosnia+%26+Herzegovina");
        assert_eq!(urlencode("São Tomé?x=1"), "S%C3%A3o+Tom%C3%A9%3Fx%3D1");
    }
}
