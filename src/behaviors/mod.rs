//! Entity behaviours, each a [`Task`](crate::scheduler::Task) over the
//! [`World`](crate::world::World).

pub mod debris;
pub mod explosion;
pub mod game_over;
pub mod gunfire;
pub mod player;
pub mod spawner;
pub mod star;

pub use debris::{DebrisFall, DebrisState};
pub use explosion::Explosion;
pub use game_over::GameOver;
pub use gunfire::Gunfire;
pub use player::{PlayerMode, Spaceship};
pub use spawner::DebrisSpawner;
pub use star::Blink;
