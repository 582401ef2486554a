use crate::catalog::Product;

fn product(
    id: u32,
    name: &str,
    description: &str,
    category: &str,
    price: f64,
    image: &str,
    stock: u32,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        image: image.to_string(),
        stock,
    }
}

/// Static catalog shipped with the storefront pages.
pub(crate) fn sample_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Premium Wireless Headphones",
            "High-quality wireless headphones with noise cancellation",
            "Electronics",
            299.99,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
            50,
        ),
        product(
            2,
            "Casual Cotton T-Shirt",
            "Comfortable cotton t-shirt for everyday wear",
            "Clothing",
            29.99,
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
            100,
        ),
        product(
            3,
            "Smart Home Security Camera",
            "WiFi-enabled security camera with night vision",
            "Electronics",
            149.99,
            "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=400",
            30,
        ),
        product(
            4,
            "Running Shoes",
            "Comfortable running shoes with excellent support and cushioning",
            "Sports",
            129.99,
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
            75,
        ),
        product(
            5,
            "Coffee Maker",
            "Programmable coffee maker with thermal carafe and auto-brew feature",
            "Home & Kitchen",
            89.99,
            "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=400",
            40,
        ),
        product(
            6,
            "Laptop",
            "High-performance laptop for work and gaming with fast SSD storage",
            "Electronics",
            1299.99,
            "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=400",
            15,
        ),
        product(
            7,
            "Smartphone",
            "Latest generation smartphone with advanced camera and fast processor",
            "Electronics",
            699.99,
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400",
            25,
        ),
        product(
            8,
            "Denim Jacket",
            "Classic denim jacket with a relaxed fit",
            "Clothing",
            79.99,
            "https://images.unsplash.com/photo-1551537482-f2075a1d41f2?w=400",
            0,
        ),
        product(
            9,
            "Yoga Mat",
            "Non-slip yoga mat for home workouts and gym sessions",
            "Sports",
            34.99,
            "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=400",
            60,
        ),
        product(
            10,
            "Ceramic Dinner Set",
            "Twelve piece ceramic dinner set for the kitchen table",
            "Home & Kitchen",
            59.99,
            "https://images.unsplash.com/photo-1603199506016-b9a594b593c0?w=400",
            12,
        ),
    ]
}
