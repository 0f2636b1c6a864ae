//! Canonical posts inserted into an empty store on first start.

use super::NewPost;

/// Number of canonical seed posts.
pub const SEED_POST_COUNT: usize = 10;

const SEED_POSTS: [(&str, &str, u32, u32); SEED_POST_COUNT] = [
    (
        "Alice Brown",
        "Had an amazing time hiking today! The views were breathtaking.",
        120,
        15,
    ),
    (
        "John Smith",
        "Finally tried that new restaurant downtown. The food was incredible!",
        98,
        22,
    ),
    (
        "Emma Davis",
        "Learning JavaScript has been a fun experience. Excited to build more projects!",
        134,
        9,
    ),
    (
        "Michael Johnson",
        "Just finished my first marathon! Feeling proud and exhausted.",
        250,
        30,
    ),
    (
        "Sophia Garcia",
        "Adopted a puppy today. Say hello to Max!",
        345,
        40,
    ),
    (
        "James Martinez",
        "Exploring photography lately. Captured some great sunset shots.",
        87,
        11,
    ),
    (
        "Olivia Wilson",
        "Spent the weekend gardening. Nature therapy is the best therapy.",
        156,
        20,
    ),
    (
        "Liam Thompson",
        "Started a new book series. Highly recommend it to fantasy lovers.",
        110,
        8,
    ),
    (
        "Mia Anderson",
        "Visited the art gallery today. The creativity on display was inspiring.",
        175,
        18,
    ),
    (
        "Ethan Moore",
        "Weekend camping trip was a success! Great friends, food, and stories.",
        220,
        25,
    ),
];

/// The canonical dataset, without identifiers.
pub fn seed_posts() -> Vec<NewPost> {
    SEED_POSTS
        .iter()
        .map(|&(name, content, likes, comments)| NewPost {
            name: name.to_string(),
            content: content.to_string(),
            likes,
            comments,
        })
        .collect()
}
