//!
//! Glframe is a small utility framework for learning real-time graphics.
//!
//! At its core is a homogeneous vector and 4x4 matrix library ([`math`]) for building
//! camera frames, view matrices and projections. Around it sit CPU side helpers that
//! produce data ready for upload to any OpenGL binding: procedural meshes ([`mesh`]),
//! decoded textures ([`texture`]), shader program sources ([`shader`]), a free-fly
//! camera controller ([`camera`]) and a frame timer ([`timer`]).
//!
//! Matrices are row-major with rows holding the right, up, forward and position
//! vectors of a frame.

pub mod camera;
pub mod config;
pub mod filesystem;
pub mod math;
pub mod mesh;
pub mod obj_writer;
pub mod shader;
pub mod texture;
pub mod timer;
