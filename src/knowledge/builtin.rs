use super::{Category, KnowledgeEntry, Severity};

fn entry(
    id: &str,
    category: Category,
    title: &str,
    content: &str,
    keywords: &[&str],
    severity: Severity,
    related_components: &[&str],
) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.to_string(),
        category,
        title: title.to_string(),
        content: content.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        severity,
        related_components: related_components.iter().map(|c| c.to_string()).collect(),
    }
}

pub(super) fn entries() -> Vec<KnowledgeEntry> {
    use Category::*;
    use Severity::*;

    vec![
        // diagnostic patterns
        entry(
            "dp-overheating",
            DiagnosticPattern,
            "Engine Overheating",
            "Engine overheating shows up as a temperature gauge climbing into the red, steam \
             from under the hood or a sweet coolant smell. Overheating on the highway or in \
             stop-and-go traffic usually points to low coolant, a stuck thermostat, a failed \
             water pump, a dead radiator fan or a clogged radiator. Driving while overheating \
             can warp the cylinder head and blow the head gasket, so pull over and let the \
             engine cool.",
            &["overheating", "engine overheating", "temperature gauge", "coolant", "steam"],
            Critical,
            &["radiator", "thermostat", "water pump", "radiator fan"],
        ),
        entry(
            "dp-rough-idle",
            DiagnosticPattern,
            "Rough Idle and Engine Misfire",
            "A rough idle feels like the engine is shaking or stumbling while stopped. Worn \
             spark plugs, a failing ignition coil, a vacuum leak or dirty fuel injectors are \
             the usual culprits. A misfire that gets worse under load often comes with a \
             flashing warning on the dash.",
            &["rough idle", "misfire", "shaking", "spark plug", "ignition coil"],
            High,
            &["spark plugs", "ignition coils", "fuel injectors"],
        ),
        entry(
            "dp-no-start",
            DiagnosticPattern,
            "Car Won't Start",
            "If the car won't start and you hear rapid clicking, the battery is likely dead or \
             the terminals are corroded. A single click points to the starter motor or its \
             relay. If the engine cranks but never fires, suspect the fuel pump, a clogged \
             fuel filter or a failed crankshaft position sensor.",
            &["won't start", "no start", "clicking", "dead battery", "starter", "cranks"],
            High,
            &["battery", "starter motor", "fuel pump"],
        ),
        entry(
            "dp-brake-noise",
            DiagnosticPattern,
            "Squealing or Grinding Brakes",
            "A high-pitched squeal when you stop usually comes from the wear indicator on a \
             brake pad telling you the pads are thin. Grinding means the pad material is gone \
             and metal is scraping the rotor. Squealing brakes should be inspected soon; \
             grinding brakes need immediate service to avoid rotor damage.",
            &["brake noise", "squealing brakes", "grinding", "brake pad", "rotor"],
            High,
            &["brake pads", "rotors", "calipers"],
        ),
        entry(
            "dp-vibration",
            DiagnosticPattern,
            "Vibration at Speed",
            "A steering wheel that vibrates above 50 mph usually means unbalanced tires. \
             Vibration while braking points to warped rotors. A humming or growling noise \
             that changes with speed suggests a worn wheel bearing.",
            &["vibration", "shaking steering wheel", "tire balance", "wheel bearing"],
            Medium,
            &["tires", "rotors", "wheel bearings"],
        ),
        entry(
            "dp-white-smoke",
            DiagnosticPattern,
            "White Smoke from Exhaust",
            "Thick white smoke with a sweet smell means coolant is burning in the combustion \
             chamber, most often from a blown head gasket or a cracked cylinder head. Thin \
             vapor on a cold morning is just condensation and is harmless.",
            &["white smoke", "exhaust smoke", "coolant loss", "head gasket"],
            Critical,
            &["head gasket", "cylinder head"],
        ),
        entry(
            "dp-battery-drain",
            DiagnosticPattern,
            "Battery Keeps Dying",
            "A battery that dies overnight points to a parasitic drain such as a glovebox \
             light, a stuck relay or an aftermarket accessory. If the battery light comes on \
             while driving, the alternator is not charging.",
            &["battery drain", "dead battery", "parasitic drain", "battery light"],
            Medium,
            &["battery", "alternator"],
        ),
        // obd code guidance
        entry(
            "obd-reading-codes",
            ObdCode,
            "Reading OBD-II Trouble Codes",
            "Every car sold since 1996 has an OBD-II port under the dashboard. Plug in a \
             scanner to read diagnostic trouble codes. The first letter names the system: \
             P for powertrain, B for body, C for chassis and U for network. Clearing a code \
             does not fix the underlying fault.",
            &["obd", "obd2", "scanner", "trouble code", "dtc", "diagnostic code"],
            Low,
            &["obd port", "ecu"],
        ),
        entry(
            "obd-catalyst-codes",
            ObdCode,
            "Catalyst Efficiency Codes",
            "Codes P0420 and P0430 mean the downstream oxygen sensor sees the catalytic \
             converter storing too little oxygen. Rule out exhaust leaks and a lazy oxygen \
             sensor before replacing the converter.",
            &["catalyst efficiency", "catalytic converter", "p0420", "p0430"],
            High,
            &["catalytic converter", "oxygen sensors"],
        ),
        entry(
            "obd-misfire-codes",
            ObdCode,
            "Misfire Codes P0300 to P0308",
            "P0300 reports random misfires across cylinders while P0301 through P0308 name \
             the cylinder that misfired. Swap the coil from the misfiring cylinder with a \
             neighbor to see whether the code follows it.",
            &["misfire code", "p0300", "cylinder misfire", "random misfire"],
            High,
            &["ignition coils", "spark plugs"],
        ),
        // maintenance guides
        entry(
            "mg-oil-change",
            MaintenanceGuide,
            "Engine Oil Change Interval",
            "Change your engine oil every 5,000 to 7,500 miles with synthetic engine oil, or \
             every 3,000 to 5,000 miles with conventional oil. How often you need an oil \
             change also depends on driving conditions: towing, short trips and extreme heat \
             call for a shorter interval. Replace the oil filter at every oil change and \
             follow the schedule in your owner's manual.",
            &["oil change", "engine oil", "oil interval", "oil filter", "change oil"],
            Medium,
            &["engine oil", "oil filter"],
        ),
        entry(
            "mg-brake-fluid",
            MaintenanceGuide,
            "Brake Fluid Replacement",
            "Brake fluid absorbs moisture over time, which lowers its boiling point and \
             corrodes lines. Flush and replace brake fluid every two years regardless of \
             mileage.",
            &["brake fluid", "brake flush", "fluid replacement"],
            Medium,
            &["brake fluid", "brake lines"],
        ),
        entry(
            "mg-tire-rotation",
            MaintenanceGuide,
            "Tire Rotation and Pressure",
            "Rotate tires every 6,000 miles to even out tread wear. Check tire pressure \
             monthly when the tires are cold and inflate to the value on the door jamb \
             sticker, not the number on the sidewall.",
            &["tire rotation", "tire pressure", "tread wear"],
            Low,
            &["tires"],
        ),
        entry(
            "mg-timing-belt",
            MaintenanceGuide,
            "Timing Belt Replacement",
            "Replace the timing belt between 60,000 and 100,000 miles depending on the \
             manufacturer. On interference engines a snapped belt lets the valves hit the \
             pistons, so do not skip this service. Replace the water pump at the same time \
             if it is driven by the belt.",
            &["timing belt", "belt replacement", "interference engine"],
            High,
            &["timing belt", "water pump", "tensioner"],
        ),
        entry(
            "mg-coolant-flush",
            MaintenanceGuide,
            "Coolant Flush Schedule",
            "Flush the cooling system and refill with fresh antifreeze every 30,000 to \
             50,000 miles. Old coolant turns acidic, eats the radiator and lets the engine \
             run hotter than normal.",
            &["coolant flush", "antifreeze", "cooling system service"],
            Medium,
            &["radiator", "coolant"],
        ),
        entry(
            "mg-air-filter",
            MaintenanceGuide,
            "Engine Air Filter Replacement",
            "Replace the engine air filter every 15,000 to 30,000 miles, sooner on dusty \
             roads. A clogged filter starves the engine of air and costs fuel economy.",
            &["air filter", "filter replacement", "intake"],
            Low,
            &["air filter"],
        ),
        // component info
        entry(
            "ci-catalytic-converter",
            ComponentInfo,
            "Catalytic Converter",
            "The catalytic converter sits in the exhaust and uses platinum, palladium and \
             rhodium to turn carbon monoxide, hydrocarbons and nitrogen oxides into carbon \
             dioxide, water and nitrogen. It is monitored by the upstream and downstream \
             oxygen sensors.",
            &["catalytic converter", "emissions", "exhaust"],
            Medium,
            &["catalytic converter", "exhaust system"],
        ),
        entry(
            "ci-oxygen-sensor",
            ComponentInfo,
            "Oxygen Sensor",
            "An oxygen sensor measures how much oxygen is left in the exhaust so the engine \
             computer can adjust the air fuel mixture. A failing oxygen sensor hurts fuel \
             economy and can trigger catalyst codes.",
            &["oxygen sensor", "o2 sensor", "air fuel mixture"],
            Medium,
            &["oxygen sensor", "ecu"],
        ),
        entry(
            "ci-thermostat",
            ComponentInfo,
            "Thermostat and Cooling System",
            "The thermostat is a valve between the engine and the radiator. It stays closed \
             until the engine warms up, then opens to let coolant flow. A thermostat stuck \
             open makes the heater blow cold and the engine run below normal temperature.",
            &["thermostat", "cooling system", "engine temperature"],
            Medium,
            &["thermostat", "radiator"],
        ),
        entry(
            "ci-alternator",
            ComponentInfo,
            "Alternator",
            "The alternator is driven by the serpentine belt and charges the battery while \
             the engine runs. A weak alternator causes dim headlights, a battery light on the \
             dash and eventually a dead battery.",
            &["alternator", "charging system", "serpentine belt"],
            Medium,
            &["alternator", "serpentine belt", "battery"],
        ),
        // faq
        entry(
            "faq-synthetic-oil",
            Faq,
            "Is Synthetic Oil Worth It?",
            "Synthetic oil resists breakdown at high temperature, flows better in cold \
             weather and lasts longer between services. Most modern engines require it and \
             older engines can switch safely.",
            &["synthetic oil", "conventional oil", "oil type"],
            Low,
            &["lubrication"],
        ),
        entry(
            "faq-check-engine-light",
            Faq,
            "Is It Safe to Drive with the Check Engine Light On?",
            "A steady check engine light means a fault has been stored; it is usually safe \
             to drive to a shop soon. A flashing check engine light means an active misfire \
             that can destroy the catalytic converter, so stop driving and get it towed.",
            &["check engine light", "safe to drive", "flashing light"],
            Medium,
            &["ecu"],
        ),
        entry(
            "faq-premium-fuel",
            Faq,
            "Do I Need Premium Fuel?",
            "Only if the manufacturer requires it. Engines that merely recommend premium run \
             fine on regular with a small loss of power. Using premium in an engine designed \
             for regular gives no benefit.",
            &["premium fuel", "octane", "regular gas"],
            Low,
            &["fuel system"],
        ),
        entry(
            "faq-warning-lights",
            Faq,
            "What Do Dashboard Warning Lights Mean?",
            "Red warning lights such as oil pressure or temperature demand an immediate \
             stop. Amber lights such as tire pressure or traction control mean the car needs \
             attention soon. Green and blue lights are just indicators.",
            &["warning lights", "dashboard lights", "indicator"],
            Medium,
            &["instrument cluster"],
        ),
        // vehicle complaints
        entry(
            "vc-transmission-slipping",
            VehicleComplaint,
            "Transmission Slipping Complaints",
            "Owners report the transmission slipping between gears, delayed engagement into \
             drive and harsh shifts, mostly on high-mileage automatics. Low or burnt \
             transmission fluid and worn clutch packs are the common findings.",
            &["transmission slipping", "delayed shift", "harsh shift"],
            High,
            &["transmission", "torque converter"],
        ),
        entry(
            "vc-oil-consumption",
            VehicleComplaint,
            "Excessive Oil Consumption Reports",
            "Owners report having to add a quart every 1,000 miles with no visible leak. \
             Stuck piston rings and failed valve stem seals are the usual causes, and several \
             manufacturers extended warranties for it.",
            &["oil consumption", "burning oil", "piston rings"],
            High,
            &["piston rings", "valve seals"],
        ),
        entry(
            "vc-electrical",
            VehicleComplaint,
            "Intermittent Electrical Problems",
            "Owners report flickering interior lights, infotainment reboots and random \
             warning messages. Corroded grounds and a weak battery are frequent findings.",
            &["electrical problems", "flickering lights", "infotainment"],
            Medium,
            &["wiring harness", "battery"],
        ),
        entry(
            "vc-ac-warm",
            VehicleComplaint,
            "Air Conditioning Blowing Warm Air",
            "A common complaint is the air conditioning blowing warm air after a few years. \
             Refrigerant leaks at the condenser and failed compressor clutches account for \
             most cases.",
            &["air conditioning", "ac not cold", "refrigerant leak"],
            Low,
            &["compressor", "condenser"],
        ),
    ]
}
