//! 启动时的种子数据

use stand_domain_core::Money;

use crate::domain::entities::{Customer, Product, TeamMember};
use crate::domain::enums::{MemberStatus, ProductCategory};
use crate::domain::value_objects::{CustomerId, Email, ProductSlug};

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    category: ProductCategory,
    stock: u32,
}

const PRODUCTS: [SeedProduct; 8] = [
    SeedProduct {
        id: "cavendish",
        name: "Cavendish Banana",
        description: "The classic yellow banana. Sweet, creamy, and perfect for everyday snacking.",
        price_cents: 29,
        category: ProductCategory::Fresh,
        stock: 1250,
    },
    SeedProduct {
        id: "red-banana",
        name: "Red Banana",
        description: "Reddish-purple skin with a sweet, slightly raspberry-like flavor.",
        price_cents: 89,
        category: ProductCategory::Specialty,
        stock: 340,
    },
    SeedProduct {
        id: "plantain",
        name: "Plantain",
        description: "Starchy cooking banana, ideal for frying, baking, or boiling.",
        price_cents: 59,
        category: ProductCategory::Fresh,
        stock: 820,
    },
    SeedProduct {
        id: "baby-banana",
        name: "Baby Banana (Niño)",
        description: "Small, extra-sweet bananas with a rich, creamy texture.",
        price_cents: 49,
        category: ProductCategory::Specialty,
        stock: 560,
    },
    SeedProduct {
        id: "organic-cavendish",
        name: "Organic Cavendish",
        description: "Certified organic Cavendish bananas grown without synthetic pesticides.",
        price_cents: 45,
        category: ProductCategory::Organic,
        stock: 890,
    },
    SeedProduct {
        id: "burro-banana",
        name: "Burro Banana",
        description: "Chunky and square-shaped with a tangy, lemony flavor.",
        price_cents: 69,
        category: ProductCategory::Specialty,
        stock: 210,
    },
    SeedProduct {
        id: "manzano",
        name: "Manzano (Apple Banana)",
        description: "Short and plump with hints of apple and strawberry when fully ripe.",
        price_cents: 79,
        category: ProductCategory::Specialty,
        stock: 380,
    },
    SeedProduct {
        id: "organic-plantain",
        name: "Organic Plantain",
        description: "Organic plantains for savory dishes, tostones, and maduros.",
        price_cents: 75,
        category: ProductCategory::Organic,
        stock: 420,
    },
];

/// 8 个种子商品
pub fn seed_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|p| {
            Product::new(
                ProductSlug::from_static(p.id),
                p.name,
                Money::from_cents(p.price_cents),
                p.category,
            )
            .with_description(p.description)
            .with_stock(p.stock)
        })
        .collect()
}

/// (name, email, phone, address, city, state, zip, country, orders)
type SeedCustomer = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
);

#[rustfmt::skip]
const CUSTOMERS: [SeedCustomer; 20] = [
    ("Sarah Johnson", "sarah.johnson@email.com", "+1-555-0101", "123 Main St", "Portland", "OR", "97201", "USA", 92),
    ("Miguel Hernández", "miguel.h@email.com", "+52-55-1234-5678", "Av. Reforma 245", "Mexico City", "CDMX", "06600", "Mexico", 67),
    ("Emma Thompson", "emma.t@email.co.uk", "+44-20-7946-0958", "42 Baker Street", "London", "England", "NW1 6XE", "UK", 45),
    ("Kenji Tanaka", "kenji.tanaka@email.jp", "+81-3-1234-5678", "1-2-3 Shibuya", "Tokyo", "Tokyo", "150-0002", "Japan", 38),
    ("Lucas Silva", "lucas.silva@email.com.br", "+55-11-98765-4321", "Rua Augusta 1500", "São Paulo", "SP", "01304-001", "Brazil", 54),
    ("Amara Okafor", "amara.okafor@email.ng", "+234-1-234-5678", "15 Admiralty Way", "Lagos", "Lagos", "101233", "Nigeria", 21),
    ("Sophie Dubois", "sophie.dubois@email.fr", "+33-1-42-68-53-00", "8 Rue de Rivoli", "Paris", "Île-de-France", "75004", "France", 73),
    ("Liam O'Connor", "liam.oconnor@email.ie", "+353-1-234-5678", "22 Grafton Street", "Dublin", "Leinster", "D02 VF65", "Ireland", 12),
    ("Priya Sharma", "priya.sharma@email.in", "+91-22-2345-6789", "Marine Drive 56", "Mumbai", "Maharashtra", "400020", "India", 88),
    ("David Kim", "david.kim@email.com", "+1-555-0142", "890 Market St", "San Francisco", "CA", "94103", "USA", 81),
    ("Isabella Rossi", "isabella.rossi@email.it", "+39-06-1234-5678", "Via del Corso 120", "Rome", "Lazio", "00186", "Italy", 29),
    ("Noah Müller", "noah.mueller@email.de", "+49-30-1234-5678", "Unter den Linden 7", "Berlin", "Berlin", "10117", "Germany", 57),
    ("Chloe Martin", "chloe.martin@email.ca", "+1-416-555-0199", "100 Queen St W", "Toronto", "ON", "M5H 2N2", "Canada", 64),
    ("Mateo García", "mateo.garcia@email.es", "+34-91-123-4567", "Calle Mayor 10", "Madrid", "Madrid", "28013", "Spain", 33),
    ("Olivia Brown", "olivia.brown@email.com.au", "+61-2-9876-5432", "200 George St", "Sydney", "NSW", "2000", "Australia", 48),
    ("Ethan Wilson", "ethan.wilson@email.com", "+1-555-0177", "55 Lake Shore Dr", "Chicago", "IL", "60611", "USA", 15),
    ("Ana Costa", "ana.costa@email.pt", "+351-21-123-4567", "Rua Garrett 40", "Lisbon", "Lisboa", "1200-204", "Portugal", 41),
    ("Lars Andersen", "lars.andersen@email.dk", "+45-33-12-34-56", "Strøget 18", "Copenhagen", "Hovedstaden", "1160", "Denmark", 26),
    ("Fatima Al-Sayed", "fatima.alsayed@email.ae", "+971-4-123-4567", "Sheikh Zayed Rd 300", "Dubai", "Dubai", "00000", "UAE", 70),
    ("James Carter", "james.carter@email.com", "+1-555-0163", "12 Peachtree St", "Atlanta", "GA", "30303", "USA", 52),
];

/// 种子客户，ID 从 1 开始连续分配
///
/// 种子邮箱均为合法地址，非法项会被跳过
pub fn seed_customers() -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .filter_map(|&(name, email, phone, address, city, state, zip, country, orders)| {
            let email = Email::new(email).ok()?;
            Some((name, email, phone, address, city, state, zip, country, orders))
        })
        .zip(1u32..)
        .map(
            |((name, email, phone, address, city, state, zip, country, orders), id)| Customer {
                id: CustomerId(id),
                name: name.to_string(),
                email,
                phone: phone.to_string(),
                address: address.to_string(),
                city: city.to_string(),
                state: state.to_string(),
                zip: zip.to_string(),
                country: country.to_string(),
                order_count: orders,
            },
        )
        .collect()
}

const TEAM: [(&str, &str, &str, &str, MemberStatus); 8] = [
    ("1", "George Bluth Sr.", "Founder & CEO", "george", MemberStatus::Away),
    ("2", "Lucille Bluth", "CFO", "lucille", MemberStatus::Active),
    ("3", "Michael Bluth", "COO", "michael", MemberStatus::Active),
    ("4", "Gob Bluth", "Head of Marketing", "gob", MemberStatus::Offline),
    ("5", "Lindsay Bluth", "Head of PR", "lindsay", MemberStatus::Active),
    ("6", "Buster Bluth", "Inventory Manager", "buster", MemberStatus::Active),
    ("7", "Maeby Fünke", "Product Manager", "maeby", MemberStatus::Active),
    ("8", "George Michael", "Software Engineer", "georgemichael", MemberStatus::Active),
];

/// 团队名单（静态展示数据）
pub fn seed_team() -> Vec<TeamMember> {
    TEAM.iter()
        .map(|&(id, name, role, handle, status)| TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            email: format!("{handle}@nanobanana.com"),
            avatar: initials(name),
            status,
        })
        .collect()
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .filter(|c| c.is_alphabetic())
        .take(2)
        .collect()
}
