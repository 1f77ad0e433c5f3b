//! Product listing and detail commands.

use shopfront_core::{CategoryFilter, ProductId, SortKey};
use shopfront_storefront::state::ShopState;
use shopfront_storefront::views::ProductGrid;

use super::{CommandError, finish, require_product};

/// Print the product grid for the given controls.
pub fn list(shop: &mut ShopState, category: CategoryFilter, search: &str, sort: SortKey) {
    shop.set_category(category);
    shop.search(search);
    shop.set_sort(sort);
    // Only grid refreshes are queued; the listing below is that refresh.
    shop.drain_events();

    let categories: Vec<String> = shop
        .catalog()
        .categories()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    println!("Categories: {}, {}", CategoryFilter::ALL, categories.join(", "));

    match ProductGrid::for_shop(shop) {
        ProductGrid::Products(cards) => {
            for card in cards {
                let heart = if card.in_wishlist { "♥" } else { " " };
                println!(
                    "{heart} {:>3}  {} {:<24} {:>8} {:>8}  {:<8} {} [{}]",
                    card.id,
                    card.image,
                    card.name,
                    card.price,
                    card.original_price,
                    card.discount,
                    card.stars,
                    card.badge
                );
            }
        }
        ProductGrid::Empty => println!("No products found."),
    }
}

/// Open a product's detail page.
///
/// # Errors
///
/// Returns an error if the product does not exist or the hand-off fails.
pub fn view(shop: &mut ShopState, id: ProductId) -> Result<(), CommandError> {
    require_product(shop, id)?;
    shop.view_product(id);
    finish(shop)
}
