use super::{DiagnosticCode, Severity};

fn dtc(
    code: &str,
    description: &str,
    severity: Severity,
    subsystem: &str,
    common_causes: &[&str],
    symptoms: &[&str],
    cost_range: Option<&str>,
) -> DiagnosticCode {
    DiagnosticCode {
        code: code.to_string(),
        description: description.to_string(),
        severity,
        subsystem: subsystem.to_string(),
        common_causes: common_causes.iter().map(|c| c.to_string()).collect(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        cost_range: cost_range.map(str::to_string),
    }
}

pub(super) fn codes() -> Vec<DiagnosticCode> {
    use Severity::*;

    vec![
        dtc(
            "P0420",
            "Catalyst System Efficiency Below Threshold (Bank 1)",
            High,
            "emissions",
            &[
                "failing catalytic converter",
                "faulty downstream oxygen sensor",
                "exhaust leak",
                "engine misfire damage",
            ],
            &["check engine light", "failed emissions test", "rotten egg smell", "reduced power"],
            Some("$200 - $2,500"),
        ),
        dtc(
            "P0430",
            "Catalyst System Efficiency Below Threshold (Bank 2)",
            High,
            "emissions",
            &["failing catalytic converter", "faulty downstream oxygen sensor", "exhaust leak"],
            &["check engine light", "failed emissions test"],
            Some("$200 - $2,500"),
        ),
        dtc(
            "P0300",
            "Random or Multiple Cylinder Misfire Detected",
            High,
            "ignition",
            &["worn spark plugs", "failing ignition coils", "vacuum leak", "low fuel pressure"],
            &["rough idle", "flashing check engine light", "hesitation", "loss of power"],
            Some("$100 - $1,000"),
        ),
        dtc(
            "P0301",
            "Cylinder 1 Misfire Detected",
            High,
            "ignition",
            &["bad spark plug", "bad ignition coil", "clogged fuel injector"],
            &["rough idle", "engine shaking", "check engine light"],
            Some("$100 - $600"),
        ),
        dtc(
            "P0171",
            "System Too Lean (Bank 1)",
            Medium,
            "fuel",
            &["vacuum leak", "dirty mass air flow sensor", "weak fuel pump", "clogged fuel filter"],
            &["rough idle", "hesitation on acceleration", "check engine light"],
            Some("$100 - $800"),
        ),
        dtc(
            "P0128",
            "Coolant Thermostat Below Regulating Temperature",
            Medium,
            "cooling",
            &["thermostat stuck open", "faulty coolant temperature sensor", "low coolant"],
            &["heater blows cold", "temperature gauge reads low", "poor fuel economy"],
            Some("$150 - $400"),
        ),
        dtc(
            "P0217",
            "Engine Coolant Over Temperature Condition",
            Critical,
            "cooling",
            &[
                "low coolant",
                "failed water pump",
                "stuck closed thermostat",
                "radiator fan failure",
            ],
            &["temperature gauge in the red", "steam from the hood", "engine power limited"],
            Some("$150 - $1,500"),
        ),
        dtc(
            "P0442",
            "Evaporative Emission System Small Leak Detected",
            Low,
            "evap",
            &["loose gas cap", "cracked evap hose", "faulty purge valve"],
            &["check engine light", "faint fuel smell"],
            Some("$20 - $400"),
        ),
        dtc(
            "P0455",
            "Evaporative Emission System Large Leak Detected",
            Low,
            "evap",
            &["missing or loose gas cap", "disconnected evap hose", "failed vent valve"],
            &["check engine light", "fuel smell"],
            Some("$20 - $500"),
        ),
        dtc(
            "P0135",
            "O2 Sensor Heater Circuit Malfunction (Bank 1 Sensor 1)",
            Medium,
            "emissions",
            &["failed oxygen sensor heater", "blown heater fuse", "damaged wiring"],
            &["check engine light", "poor fuel economy"],
            Some("$100 - $350"),
        ),
        dtc(
            "P0101",
            "Mass Air Flow Sensor Range or Performance Problem",
            Medium,
            "fuel",
            &["dirty mass air flow sensor", "intake leak", "clogged air filter"],
            &["hesitation", "stalling", "poor fuel economy"],
            Some("$80 - $400"),
        ),
        dtc(
            "P0335",
            "Crankshaft Position Sensor Circuit Malfunction",
            High,
            "ignition",
            &["failed crankshaft position sensor", "damaged reluctor ring", "wiring fault"],
            &["engine cranks but will not start", "stalling", "no tachometer reading"],
            Some("$120 - $400"),
        ),
        dtc(
            "P0562",
            "System Voltage Low",
            Medium,
            "charging",
            &["weak alternator", "worn serpentine belt", "corroded battery terminals"],
            &["battery light", "dim headlights", "hard starting"],
            Some("$100 - $700"),
        ),
        dtc(
            "P0700",
            "Transmission Control System Malfunction",
            High,
            "transmission",
            &[
                "transmission control module fault",
                "shift solenoid failure",
                "low transmission fluid",
            ],
            &["harsh shifting", "limp mode", "transmission slipping"],
            None,
        ),
        dtc(
            "C0035",
            "Left Front Wheel Speed Sensor Circuit",
            Medium,
            "brakes",
            &["damaged wheel speed sensor", "debris on tone ring", "wiring damage"],
            &["abs light", "traction control light", "abs disabled"],
            Some("$100 - $300"),
        ),
        dtc(
            "B0001",
            "Driver Frontal Stage 1 Deployment Control",
            Critical,
            "body",
            &["faulty clockspring", "airbag module fault", "wiring connector issue"],
            &["airbag warning light"],
            Some("$150 - $900"),
        ),
        dtc(
            "U0100",
            "Lost Communication With Engine Control Module",
            High,
            "network",
            &["can bus wiring fault", "failed engine control module", "low battery voltage"],
            &["no start", "multiple warning lights", "gauges not working"],
            None,
        ),
    ]
}
