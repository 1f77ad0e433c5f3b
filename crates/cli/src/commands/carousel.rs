//! Category carousel command.

use shopfront_storefront::carousel::Carousel;

/// Print the slide position, dots and track offset.
pub fn show(carousel: &Carousel) {
    let dots: Vec<&str> = carousel
        .dots()
        .into_iter()
        .map(|active| if active { "●" } else { "○" })
        .collect();
    println!(
        "Slide {}/{} ({} card(s) per view)  {}",
        carousel.current() + 1,
        carousel.slide_count(),
        carousel.per_view(),
        dots.join(" ")
    );
    println!("translateX({}px)", carousel.offset_px());
}
