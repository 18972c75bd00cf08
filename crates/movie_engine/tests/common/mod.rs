#![allow(dead_code)]

use std::sync::Once;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scrape_logging::initialize_for_tests);
}

/// Chart page with one ranked row per href; poster cells carry decoy anchors.
pub fn listing_page(hrefs: &[&str]) -> String {
    let rows: String = hrefs
        .iter()
        .enumerate()
        .map(|(rank, href)| {
            format!(
                r#"<tr><td class="posterColumn"><a href="/poster{href}">poster</a></td><td class="titleColumn">{rank}. <a href="{href}">Movie {rank}</a> <span class="secondaryInfo">(1994)</span></td><td class="ratingColumn">9.2</td></tr>"#
            )
        })
        .collect();
    format!(
        r#"<!DOCTYPE html><html><head><title>Top Rated</title></head><body><table class="chart"><thead><tr><th>Rank</th></tr></thead><tbody class="lister-list">{rows}</tbody></table></body></html>"#
    )
}

pub fn detail_page(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>{title}</title></head><body>
<div class="poster"><a href="/mediaviewer"><img alt="{title} poster" src="https://img.example.com/{title}.jpg"></a></div>
<div class="title_wrapper"><h1>{title}&nbsp;<span id="titleYear">(<a href="/year/1994/">1994</a>)</span></h1>
<div class="subtext">R | 2h 22min | <a href="/g/drama">Drama</a>, <a href="/g/crime">Crime</a> | <a href="/releaseinfo">14 October 1994 (USA)</a></div>
</div>
<div class="summary_text">
        Two imprisoned men bond over a number of years.
</div>
<div class="credit_summary_item"><h4 class="inline">Director:</h4>
<a href="/name/nm1">Frank Darabont</a></div>
<div class="credit_summary_item"><h4 class="inline">Writers:</h4>
<a href="/name/nm2">Stephen King</a></div>
<div class="credit_summary_item"><h4 class="inline">Stars:</h4>
<a href="/name/nm3">Tim Robbins</a>, <a href="/name/nm4">Morgan Freeman</a>, <a href="/name/nm5">Bob Gunton</a> | <a href="/fullcredits">See full cast &amp; crew</a></div>
</body></html>"#
    )
}

/// Detail page whose subtext block is gone.
pub fn broken_detail_page() -> String {
    r#"<html><body><div class="title_wrapper"><h1>Broken</h1></div></body></html>"#.to_string()
}
