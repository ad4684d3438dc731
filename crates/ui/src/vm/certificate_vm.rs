use academy_core::model::Certificate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateVm {
    pub learner: String,
    pub issued_on: String,
    pub score_label: String,
}

impl From<&Certificate> for CertificateVm {
    fn from(certificate: &Certificate) -> Self {
        Self {
            learner: certificate.learner.clone(),
            issued_on: certificate.issued_on.format("%B %-d, %Y").to_string(),
            score_label: format!("{} XP Mastery", certificate.xp),
        }
    }
}
