pub mod carrier;
pub mod dosage_threshold;
pub mod loss_gain;
pub mod ranked_pair;

pub use carrier::CarrierClassifier;
pub use dosage_threshold::DosageThresholdClassifier;
pub use loss_gain::LossGainClassifier;
pub use ranked_pair::RankedPairClassifier;
