//! Movement controller integration tests: full schedule, flat floor.

use bevy_ecs::prelude::*;

use trickbit::components::animation::{AnimKey, AnimationState};
use trickbit::components::groundcontact::GroundContact;
use trickbit::components::mapposition::MapPosition;
use trickbit::components::player::{MovementStatus, PlayerController};
use trickbit::components::rigidbody::{MOVE_FORCE, RigidBody};
use trickbit::events::notice::GameNotice;
use trickbit::game::Game;
use trickbit::resources::gameconfig::GameConfig;
use trickbit::resources::input::InputSnapshot;
use trickbit::resources::levelstore::{LevelData, LevelStore, SpawnPoint};
use trickbit::resources::terrain::BASE_LAYER;
use trickbit::resources::tilemap::{Tilelayer, Tilemap};

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-3;

fn flat_level() -> LevelData {
    LevelData {
        key: "flat".into(),
        title: "Flat".into(),
        next: None,
        scale: 2.0,
        // Feet exactly on the floor top (row 30 starts at y = 960).
        player_spawn: SpawnPoint { x: 400.0, y: 944.0 },
        enemy_spawns: vec![],
        keys_required: 1,
        objects: vec![],
        tilemap: Tilemap {
            tile_size: 16,
            map_width: 160,
            map_height: 32,
            layers: vec![Tilelayer::new(BASE_LAYER).with_run(30, 0, 159)],
        },
    }
}

fn make_game() -> Game {
    let mut levels = LevelStore::new();
    levels.insert(flat_level());
    let mut game = Game::new(GameConfig::new(), levels);
    game.start(None).expect("level starts");
    // Let the body register its ground contact.
    hold(&mut game, InputSnapshot::default(), 3);
    game
}

fn hold(game: &mut Game, input: InputSnapshot, frames: u32) -> Vec<GameNotice> {
    let mut notices = Vec::new();
    for _ in 0..frames {
        game.tick(DT, input);
        notices.extend(game.drain_notices());
    }
    notices
}

fn player<T: Component + Clone>(game: &mut Game) -> T {
    let world = game.world_mut();
    world
        .query_filtered::<&T, With<PlayerController>>()
        .single(world)
        .cloned()
        .expect("one player")
}

fn count(notices: &[GameNotice], wanted: &GameNotice) -> usize {
    notices.iter().filter(|n| *n == wanted).count()
}

#[test]
fn player_settles_on_the_floor() {
    let mut game = make_game();
    assert!(player::<GroundContact>(&mut game).down);
    let pos = player::<MapPosition>(&mut game).pos;
    assert!((pos.y - 944.0).abs() < EPSILON);
    assert_eq!(player::<RigidBody>(&mut game).velocity.y, 0.0);
}

#[test]
fn walking_right_accelerates_to_the_cap() {
    let mut game = make_game();
    let start_x = player::<MapPosition>(&mut game).pos.x;

    let mut previous = 0.0;
    for _ in 0..90 {
        hold(&mut game, InputSnapshot::right(), 1);
        let vx = player::<RigidBody>(&mut game).velocity.x;
        assert!(vx <= 200.0 + EPSILON, "vx {} over the cap", vx);
        assert!(vx >= previous - EPSILON);
        previous = vx;
    }
    assert!((previous - 200.0).abs() < EPSILON);
    assert!(player::<MapPosition>(&mut game).pos.x > start_x + 100.0);

    let ctrl = player::<PlayerController>(&mut game);
    assert_eq!(ctrl.status, MovementStatus::Walking);
    assert!(!ctrl.facing_left);
    assert_eq!(player::<AnimationState>(&mut game).key, AnimKey::Walk);
}

#[test]
fn release_brakes_to_a_stop_without_reversing() {
    let mut game = make_game();
    hold(&mut game, InputSnapshot::left(), 60);
    assert!((player::<RigidBody>(&mut game).velocity.x + 200.0).abs() < EPSILON);

    hold(&mut game, InputSnapshot::default(), 2);
    assert_eq!(player::<RigidBody>(&mut game).velocity.x, 0.0);
    hold(&mut game, InputSnapshot::default(), 10);
    assert_eq!(player::<RigidBody>(&mut game).velocity.x, 0.0);

    let ctrl = player::<PlayerController>(&mut game);
    assert_eq!(ctrl.status, MovementStatus::Idle);
    assert!(ctrl.facing_left);
    let anim = player::<AnimationState>(&mut game);
    assert_eq!(anim.key, AnimKey::Idle);
    assert!(anim.flip_h);
}

#[test]
fn held_jump_fires_once() {
    let mut game = make_game();
    let jump = InputSnapshot::default().with_jump();

    let notices = hold(&mut game, jump, 120);
    assert_eq!(count(&notices, &GameNotice::Jumped), 1);
    // Landed again and still holding: no second jump.
    assert!(player::<GroundContact>(&mut game).down);

    hold(&mut game, InputSnapshot::default(), 1);
    let notices = hold(&mut game, jump, 1);
    assert_eq!(count(&notices, &GameNotice::Jumped), 1);
}

#[test]
fn jump_reaches_the_expected_apex() {
    let mut game = make_game();
    let ground_y = player::<MapPosition>(&mut game).pos.y;
    hold(&mut game, InputSnapshot::default().with_jump(), 1);

    let mut apex = ground_y;
    for _ in 0..60 {
        hold(&mut game, InputSnapshot::default(), 1);
        apex = apex.min(player::<MapPosition>(&mut game).pos.y);
    }
    // v^2 / 2g = 600^2 / 4000 = 90
    let height = ground_y - apex;
    assert!(height > 80.0 && height < 95.0, "apex height {}", height);
    assert!(player::<GroundContact>(&mut game).down);
}

#[test]
fn airborne_steering_uses_air_acceleration() {
    let mut game = make_game();
    hold(&mut game, InputSnapshot::default().with_jump(), 1);
    hold(&mut game, InputSnapshot::right(), 5);

    assert!(!player::<GroundContact>(&mut game).down);
    let body = player::<RigidBody>(&mut game);
    assert_eq!(body.get_force(MOVE_FORCE).map(|f| f.value.x), Some(200.0));
    assert_eq!(body.drag.x, 20_000.0);
    assert_eq!(player::<PlayerController>(&mut game).status, MovementStatus::Jumping);
    assert_eq!(player::<AnimationState>(&mut game).key, AnimKey::Jump);
}

#[test]
fn step_notices_follow_distance_walked() {
    let mut game = make_game();
    let start_x = player::<MapPosition>(&mut game).pos.x;
    let notices = hold(&mut game, InputSnapshot::right(), 180);
    let walked = player::<MapPosition>(&mut game).pos.x - start_x;
    let steps = count(&notices, &GameNotice::Step) as f32;
    let expected = walked / 64.0;
    assert!(
        (steps - expected).abs() <= 1.0,
        "{} steps for {} units",
        steps,
        walked
    );
}

#[test]
fn random_input_never_breaks_the_speed_cap() {
    let mut game = make_game();
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..600 {
        let input = InputSnapshot {
            move_left: rng.bool(),
            move_right: rng.bool(),
            jump: rng.u8(0..10) == 0,
            ..Default::default()
        };
        hold(&mut game, input, 1);
        let vx = player::<RigidBody>(&mut game).velocity.x;
        assert!(vx.abs() <= 200.0 + EPSILON, "vx {} over the cap", vx);
    }
}

#[test]
fn left_wins_when_both_directions_are_held() {
    let mut game = make_game();
    let both = InputSnapshot {
        move_left: true,
        move_right: true,
        ..Default::default()
    };
    hold(&mut game, both, 10);
    assert!(player::<RigidBody>(&mut game).velocity.x < 0.0);
    assert!(player::<PlayerController>(&mut game).facing_left);
}
