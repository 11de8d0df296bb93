pub mod seaorm;

pub use seaorm::SeaOrmUserRoleRepository;
