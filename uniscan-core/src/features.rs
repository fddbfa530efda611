mod feature;

use indexmap::IndexSet;

pub use self::feature::Feature;
use crate::Region;

/// Returns the features that overlap the given region, in their original order.
///
/// Chain features are never included since they span the whole protein. Features that end before
/// they start are skipped.
pub fn filter(features: &[Feature], region: &Region) -> Vec<Feature> {
    features
        .iter()
        .filter(|feature| !feature.is_chain())
        .filter(|feature| feature.is_well_formed())
        .filter(|feature| feature.intersects(region))
        .cloned()
        .collect()
}

/// Joins the distinct `label (type)` descriptions of the given features.
///
/// This returns `None` if there are no features.
pub fn summarize(features: &[Feature]) -> Option<String> {
    let descriptions: IndexSet<_> = features
        .iter()
        .map(|feature| format!("{} ({})", feature.label(), feature.ty))
        .collect();

    if descriptions.is_empty() {
        None
    } else {
        let descriptions: Vec<_> = descriptions.into_iter().collect();
        Some(descriptions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use noodles::core::Position;

    use super::*;

    fn build_feature(
        ty: &str,
        description: &str,
        start: usize,
        end: usize,
    ) -> Result<Feature, noodles::core::position::TryFromIntError> {
        Ok(Feature::new(
            ty,
            description,
            Position::try_from(start)?,
            Position::try_from(end)?,
        ))
    }

    fn build_features() -> Result<Vec<Feature>, noodles::core::position::TryFromIntError> {
        Ok(vec![
            build_feature("Domain", "", 490, 496)?,
            build_feature("Chain", "", 1, 600)?,
            build_feature("Binding site", "", 498, 502)?,
        ])
    }

    #[test]
    fn test_filter() -> Result<(), Box<dyn std::error::Error>> {
        let features = build_features()?;

        let region = Region::new(494, 500)?;
        let actual = filter(&features, &region);
        let expected = [features[0].clone(), features[2].clone()];
        assert_eq!(actual, expected);

        let region = Region::new(700, 710)?;
        assert!(filter(&features, &region).is_empty());

        Ok(())
    }

    #[test]
    fn test_filter_with_malformed_features() -> Result<(), Box<dyn std::error::Error>> {
        let mut features = build_features()?;
        features.insert(1, build_feature("Site", "", 500, 499)?);

        let region = Region::new(494, 500)?;
        let actual = filter(&features, &region);
        let expected = [features[0].clone(), features[3].clone()];
        assert_eq!(actual, expected);

        Ok(())
    }

    #[test]
    fn test_filter_with_boundaries() -> Result<(), Box<dyn std::error::Error>> {
        let features = [
            build_feature("Site", "before", 480, 493)?,
            build_feature("Site", "touches start", 480, 494)?,
            build_feature("Site", "touches end", 500, 520)?,
            build_feature("Site", "after", 501, 520)?,
        ];

        let region = Region::new(494, 500)?;
        let actual = filter(&features, &region);
        let expected = [features[1].clone(), features[2].clone()];
        assert_eq!(actual, expected);

        Ok(())
    }

    #[test]
    fn test_filter_is_stable_and_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let features = [
            build_feature("Region", "Disordered", 450, 520)?,
            build_feature("Chain", "Protein kinase", 1, 600)?,
            build_feature("Modified residue", "Phosphoserine", 497, 497)?,
            build_feature("Helix", "", 10, 20)?,
            build_feature("Domain", "PH", 470, 495)?,
        ];

        let region = Region::new(494, 500)?;
        let first = filter(&features, &region);
        let second = filter(&features, &region);
        assert_eq!(first, second);

        let descriptions: Vec<_> = first.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(descriptions, ["Disordered", "Phosphoserine", "PH"]);

        Ok(())
    }

    #[test]
    fn test_summarize() -> Result<(), noodles::core::position::TryFromIntError> {
        assert_eq!(summarize(&[]), None);

        let features = [
            build_feature("Domain", "SH3", 490, 496)?,
            build_feature("Binding site", "", 498, 502)?,
            build_feature("Domain", "SH3", 520, 530)?,
            build_feature("Modified residue", "Phosphoserine", 497, 497)?,
        ];

        assert_eq!(
            summarize(&features),
            Some(String::from(
                "SH3 (Domain), Binding site (Binding site), Phosphoserine (Modified residue)"
            ))
        );

        Ok(())
    }
}
