use frw_core::{
    CascadeModel, Dial, EnergyBin, EventSummary, FateCategory, HadronStep, HadronType,
    ScatteringType,
};

#[test]
fn dial_roundtrips_through_json() {
    let dials = [
        Dial::Fate {
            hadron: HadronType::Pion,
            fate: FateCategory::Absorption,
        },
        Dial::MfpBin {
            hadron: HadronType::Nucleon,
            bin: EnergyBin::High,
        },
        Dial::ModelSwitch {
            hadron: HadronType::Nucleon,
            model: CascadeModel::Geant4,
            bin: Some(EnergyBin::Low),
        },
        Dial::ResonanceBugFix,
    ];
    for dial in dials {
        let bytes = serde_json::to_vec(&dial).expect("encode dial");
        let decoded: Dial = serde_json::from_slice(&bytes).expect("decode dial");
        assert_eq!(dial, decoded);
    }
}

#[test]
fn event_summary_roundtrips_through_json() {
    let mut event = EventSummary::new(ScatteringType::Resonant, true, 40);
    event.hadron_steps.push(HadronStep {
        hadron: HadronType::Pion,
        kinetic_energy: 0.25,
        interacted: true,
        fate: Some(FateCategory::ChargeExchange),
    });
    let bytes = serde_json::to_vec(&event).expect("encode event");
    let decoded: EventSummary = serde_json::from_slice(&bytes).expect("decode event");
    assert_eq!(event, decoded);
}
