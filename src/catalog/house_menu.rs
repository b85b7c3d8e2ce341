use super::{Category, MenuItem};

pub(super) fn items() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            "Espresso",
            "A short, intense shot pulled from our house blend.",
            40,
            "/images/menu/espresso.jpg",
            Category::Hot,
        ),
        MenuItem::new(
            "Cappuccino",
            "Espresso under a thick cap of velvety foam.",
            60,
            "/images/menu/cappuccino.jpg",
            Category::Hot,
        ),
        MenuItem::new(
            "Latte",
            "Espresso with silky steamed milk.",
            70,
            "/images/menu/latte.jpg",
            Category::Hot,
        ),
        MenuItem::new(
            "Masala Chai",
            "Black tea simmered with milk and warming spices.",
            30,
            "/images/menu/masala-chai.jpg",
            Category::Hot,
        ),
        MenuItem::new(
            "Hot Chocolate",
            "Dark cocoa melted into steamed milk.",
            80,
            "/images/menu/hot-chocolate.jpg",
            Category::Hot,
        ),
        MenuItem::new(
            "Cold Brew",
            "Steeped for eighteen hours and served over ice.",
            90,
            "/images/menu/cold-brew.jpg",
            Category::Cold,
        ),
        MenuItem::new(
            "Iced Latte",
            "Espresso and cold milk poured over ice.",
            80,
            "/images/menu/iced-latte.jpg",
            Category::Cold,
        ),
        MenuItem::new(
            "Caramel Frappé",
            "Blended coffee, caramel and ice, topped with cream.",
            110,
            "/images/menu/caramel-frappe.jpg",
            Category::Cold,
        ),
        MenuItem::new(
            "Lemon Iced Tea",
            "Brewed black tea with fresh lemon.",
            60,
            "/images/menu/lemon-iced-tea.jpg",
            Category::Cold,
        ),
        MenuItem::new(
            "Butter Croissant",
            "Flaky, golden and baked every morning.",
            70,
            "/images/menu/croissant.jpg",
            Category::Snacks,
        ),
        MenuItem::new(
            "Veg Club Sandwich",
            "Triple-decker with grilled vegetables and mint mayo.",
            90,
            "/images/menu/club-sandwich.jpg",
            Category::Snacks,
        ),
        MenuItem::new(
            "Chocolate Brownie",
            "Fudgy, dense and served warm.",
            60,
            "/images/menu/brownie.jpg",
            Category::Snacks,
        ),
    ]
}
