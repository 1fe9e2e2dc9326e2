//! Tests for the standard five-phase plan

#[cfg(test)]
mod tests {
    use tilereveal::descriptor::builder::Layout;
    use tilereveal::io::phases::standard_phases;
    use tilereveal::sequence::strategy::Strategy;

    // Tests the fixed phase processing order
    // Verified by reordering the plan
    #[test]
    fn test_phase_order() {
        let names: Vec<&str> = standard_phases().iter().map(|phase| phase.name).collect();

        assert_eq!(names, vec!["label", "inter_1", "inter_2", "inter_3", "pan"]);
    }

    // Tests each phase's ordering strategy
    // Verified by assigning the pan strategy to an inter phase
    #[test]
    fn test_phase_strategies() {
        let strategies: Vec<Strategy> = standard_phases()
            .iter()
            .map(|phase| phase.strategy)
            .collect();

        assert_eq!(
            strategies,
            vec![
                Strategy::FullShuffle,
                Strategy::WindowedShuffle,
                Strategy::WindowedShuffle,
                Strategy::WindowedShuffle,
                Strategy::SequentialPan,
            ]
        );
    }

    // Tests the pan phase re-reads the final inter-transition image
    // Verified by giving the pan phase its own source
    #[test]
    fn test_pan_reuses_final_inter_image() {
        let phases = standard_phases();
        let inter_3 = phases.iter().find(|phase| phase.name == "inter_3");
        let pan = phases.iter().find(|phase| phase.name == "pan");

        match (inter_3, pan) {
            (Some(inter_3), Some(pan)) => assert_eq!(inter_3.source, pan.source),
            _ => unreachable!("plan is missing a phase"),
        }
    }

    // Tests the label phase carries the display origin offset
    // Verified by zeroing the origin in the plan
    #[test]
    fn test_label_phase_layout() {
        let phases = standard_phases();
        let Some(label) = phases.iter().find(|phase| phase.name == "label") else {
            unreachable!("plan is missing the label phase");
        };

        assert_eq!(
            label.layout(100),
            Layout::Grid {
                tile_size: 8,
                origin: (50, 42),
            }
        );

        let grid = label.grid(16, 16);
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 2);
    }

    // Tests the pan phase layout spans the source height
    // Verified by fixing the strip height to the tile size
    #[test]
    fn test_pan_phase_layout() {
        let phases = standard_phases();
        let Some(pan) = phases.iter().find(|phase| phase.name == "pan") else {
            unreachable!("plan is missing the pan phase");
        };

        assert_eq!(
            pan.layout(64),
            Layout::Strip {
                width: 8,
                height: 64,
            }
        );
    }
}
