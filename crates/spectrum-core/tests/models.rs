use spectrum_core::models::color::ColorType;
use spectrum_core::models::personality::PersonalityType;
use spectrum_core::models::rating::RatingLabel;
use spectrum_core::models::scores::ScoreVector;
use spectrum_core::models::submission::{RatingInput, SubmissionRequest};
use spectrum_core::s3_keys;
use uuid::Uuid;

#[test]
fn color_parses_canonical_names_only() {
    assert_eq!("cool-blue".parse::<ColorType>().unwrap(), ColorType::CoolBlue);
    assert_eq!("fiery-red".parse::<ColorType>().unwrap(), ColorType::FieryRed);
    assert!("blue".parse::<ColorType>().is_err());
    assert!("Cool-Blue".parse::<ColorType>().is_err());
}

#[test]
fn canonical_order_is_red_yellow_green_blue() {
    let priorities: Vec<usize> = ColorType::ALL.iter().map(|c| c.priority()).collect();
    assert_eq!(priorities, vec![0, 1, 2, 3]);
    assert_eq!(ColorType::ALL[0], ColorType::FieryRed);
    assert_eq!(ColorType::ALL[3], ColorType::CoolBlue);
}

#[test]
fn rating_weights_span_zero_to_six() {
    let weights: Vec<u32> = RatingLabel::ALL.iter().map(|r| r.weight()).collect();
    assert_eq!(weights, vec![0, 1, 2, 3, 4, 5, 6]);
    assert!(!RatingLabel::Least.is_intermediate());
    assert!(!RatingLabel::Most.is_intermediate());
    assert!(RatingLabel::Three.is_intermediate());
}

#[test]
fn rating_parses_exact_labels_only() {
    assert_eq!("L".parse::<RatingLabel>().unwrap(), RatingLabel::Least);
    assert_eq!("M".parse::<RatingLabel>().unwrap(), RatingLabel::Most);
    assert_eq!("4".parse::<RatingLabel>().unwrap(), RatingLabel::Four);
    assert!("m".parse::<RatingLabel>().is_err());
    assert!("l".parse::<RatingLabel>().is_err());
    assert!(" 3 ".parse::<RatingLabel>().is_err());
    assert!("0".parse::<RatingLabel>().is_err());
    assert!("6".parse::<RatingLabel>().is_err());
    assert!("X".parse::<RatingLabel>().is_err());
}

#[test]
fn score_vector_serializes_with_color_keys() {
    let scores = ScoreVector {
        fiery_red: 33,
        sunshine_yellow: 20,
        earth_green: 28,
        cool_blue: 20,
    };
    let json = serde_json::to_value(scores).unwrap();
    assert_eq!(json["fiery-red"], 33);
    assert_eq!(json["earth-green"], 28);
    assert_eq!(scores.total(), 101);
    assert_eq!(scores.value(ColorType::EarthGreen), 28);
}

#[test]
fn score_total_does_not_overflow() {
    let max = ScoreVector {
        fiery_red: u32::MAX,
        sunshine_yellow: u32::MAX,
        earth_green: u32::MAX,
        cool_blue: u32::MAX,
    };
    assert_eq!(max.total(), 4 * u64::from(u32::MAX));
}

#[test]
fn personality_round_trips_through_display() {
    for p in PersonalityType::ALL {
        assert_eq!(p.to_string().parse::<PersonalityType>().unwrap(), p);
    }
    assert_eq!("reformer".parse::<PersonalityType>().unwrap(), PersonalityType::Reformer);
}

#[test]
fn submission_accepts_label_and_numeric_ratings() {
    let body = r#"{
        "answers": [
            {"questionId": 1, "selectedColor": "cool-blue", "rating": "L"},
            {"questionId": 1, "selectedColor": "earth-green", "rating": 3},
            {"questionId": 2, "selectedColor": "fiery-red"}
        ]
    }"#;
    let req: SubmissionRequest = serde_json::from_str(body).unwrap();
    assert_eq!(req.answers.len(), 3);
    assert_eq!(req.answers[0].rating, Some(RatingInput::Label("L".to_string())));
    assert_eq!(req.answers[1].rating.as_ref().unwrap().as_label(), "3");
    assert!(req.answers[2].rating.is_none());
    assert!(req.unconscious_answers.is_none());
}

#[test]
fn result_keys_are_grouped_by_owner() {
    let user = Uuid::new_v4();
    let id = Uuid::new_v4();
    assert_eq!(s3_keys::result(Some(user), id), format!("results/{user}/{id}.json"));
    assert_eq!(s3_keys::result(None, id), format!("results/anonymous/{id}.json"));
    assert!(s3_keys::result(Some(user), id).starts_with(&s3_keys::results_prefix(Some(user))));
}
