//! Tour of the hashing entry points.
//!
//! Run with: `cargo run --example basic`

use wordhash::{hash, hash_bytes, hash_with, Blob, Elements, Text, TextAscii, WordHashMap};

fn main() {
  // Default dispatch follows the value's type.
  println!("u64       {:#018x}", hash(&0xDEAD_BEEFu64));
  println!("i32       {:#018x}", hash(&-7i32));
  println!("f64       {:#018x}", hash(&6.5f64));
  println!("str       {:#018x}", hash("content-type"));
  println!("cstr      {:#018x}", hash(c"content-type"));
  assert_eq!(hash(c"content-type"), hash("content-type"));

  // Explicit strategies at the call site.
  #[derive(Clone, Copy, bytemuck::NoUninit)]
  #[repr(C)]
  struct Point {
    x: f32,
    y: f32,
  }
  let point = Point { x: 3.0, y: -4.0 };
  println!("blob      {:#018x}", hash_with::<Blob, _>(&point));
  println!("ascii     {:#018x}", hash_with::<TextAscii, _>("content-type"));
  println!("elements  {:#018x}", hash_with::<Elements, _>(&[3u64, 5, 7]));

  // Compile-time digests make good match keys.
  const ROUTE_USERS: wordhash::Digest = hash_bytes(b"/users");
  const ROUTE_HEALTH: wordhash::Digest = hash_bytes(b"/health");
  for path in ["/users", "/health", "/missing"] {
    let label = match hash_with::<Text, _>(path) {
      ROUTE_USERS => "users",
      ROUTE_HEALTH => "health",
      _ => "not found",
    };
    println!("route {path:>10} -> {label}");
  }

  // Tables keyed through the word hasher.
  let mut counts: WordHashMap<&str, u32> = WordHashMap::default();
  for word in "the quick brown fox jumps over the lazy dog the end".split_whitespace() {
    *counts.entry(word).or_insert(0) += 1;
  }
  println!("'the' appears {} times", counts["the"]);
}
