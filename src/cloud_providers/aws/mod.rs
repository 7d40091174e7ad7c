pub mod config;
pub mod ec2;

pub use config::AwsConfig;
pub use ec2::Ec2Client;
