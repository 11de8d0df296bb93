pub mod seaorm;

pub use seaorm::SeaOrmInviteCodeRepository;
