pub mod contact;
pub mod features;
pub mod home;
pub mod specs;

pub const PAGE_HEADING_CSS: &str = r#"
    .page-heading {
        text-align: center;
        margin-bottom: 3rem;
    }
    .page-heading h1 {
        font-size: 3.75rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .page-heading h1 span {
        background: linear-gradient(90deg, #c084fc, #f472b6);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .page-heading p {
        font-size: 1.25rem;
        color: rgba(255, 255, 255, 0.6);
    }
    @media (max-width: 768px) {
        .page-heading h1 {
            font-size: 3rem;
        }
    }
"#;

pub const SPINNER_CSS: &str = r#"
    .loading-spinner {
        width: 3rem;
        height: 3rem;
        margin: 5rem auto;
        border: 4px solid #a855f7;
        border-top-color: transparent;
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
"#;
