//! Package vocab with HiveOT vocabulary names for TD Things, properties, events and actions
//! DO NOT EDIT. This file is generated and changes will be overwritten
//! namespace: ht
//! schema digest: d8bcafb7bf4b692f420d586355d358238462b9d0021dc3971ea438f0f2d76fbc

#![allow(missing_docs, non_upper_case_globals)]

use crate::model::{ClassDescriptor, ClassEntry, ClassFamily, ClassTable, ConstantGroup, Term};

pub const NAMESPACE: &str = "ht";
pub const SCHEMA_DIGEST: &str = "d8bcafb7bf4b692f420d586355d358238462b9d0021dc3971ea438f0f2d76fbc";

// type: MessageTypes
// version: 0.1
// source: github.com/hiveot/hub/api/vocab/ht-constants.yaml
// description: Message types used throughout the Hub and its clients
pub const EventNameDeliveryUpdate: &str = "$delivery";
pub const EventNameProperties: &str = "$properties";
pub const EventNameTD: &str = "$td";
pub const MessageTypeAction: &str = "action";
pub const MessageTypeDeliveryUpdate: &str = "delivery";
pub const MessageTypeEvent: &str = "event";
pub const MessageTypeProperty: &str = "property";
// end of MessageTypes

// type: WoTVocab
// version: 0.1
// source: github.com/hiveot/hub/api/vocab/wot-vocab.yaml
// description: WoT vocabulary definition. See https://www.w3.org/TR/2020/WD-wot-thing-description11-20201124/#sec-core-vocabulary-definition
pub const WoTAPIKeySecurityScheme: &str = "APIKeySecurityScheme";
pub const WoTActions: &str = "actions";
pub const WoTAnyURI: &str = "https://www.w3.org/2019/wot/thing/v1";
pub const WoTAtContext: &str = "@context";
pub const WoTAtType: &str = "@type";
pub const WoTBasicSecurityScheme: &str = "BasicSecurityScheme";
pub const WoTBearerSecurityScheme: &str = "BearerSecurityScheme";
pub const WoTConst: &str = "const";
pub const WoTCreated: &str = "created";
pub const WoTDataType: &str = "type";
pub const WoTDataTypeAnyURI: &str = "anyURI";
pub const WoTDataTypeArray: &str = "array";
pub const WoTDataTypeBool: &str = "boolean";
pub const WoTDataTypeDateTime: &str = "dateTime";
pub const WoTDataTypeInteger: &str = "integer";
pub const WoTDataTypeNone: &str = "";
pub const WoTDataTypeNumber: &str = "number";
pub const WoTDataTypeObject: &str = "object";
pub const WoTDataTypeString: &str = "string";
pub const WoTDataTypeUnsignedInt: &str = "unsignedInt";
pub const WoTDescription: &str = "description";
pub const WoTDescriptions: &str = "descriptions";
pub const WoTDigestSecurityScheme: &str = "DigestSecurityScheme";
pub const WoTEnum: &str = "enum";
pub const WoTEvents: &str = "events";
pub const WoTFormat: &str = "format";
pub const WoTForms: &str = "forms";
pub const WoTHref: &str = "href";
pub const WoTID: &str = "id";
pub const WoTInput: &str = "input";
pub const WoTLinks: &str = "links";
pub const WoTMaxItems: &str = "maxItems";
pub const WoTMaxLength: &str = "maxLength";
pub const WoTMaximum: &str = "maximum";
pub const WoTMinItems: &str = "minItems";
pub const WoTMinLength: &str = "minLength";
pub const WoTMinimum: &str = "minimum";
pub const WoTModified: &str = "modified";
pub const WoTNoSecurityScheme: &str = "NoSecurityScheme";
pub const WoTOAuth2SecurityScheme: &str = "OAuth2SecurityScheme";
pub const WoTOpObserveProperty: &str = "observeproperty";
pub const WoTOpReadProperty: &str = "readproperty";
pub const WoTOpUnobserveProperty: &str = "unobserveroperty";
pub const WoTOpWriteProperty: &str = "writeproperty";
pub const WoTOperation: &str = "op";
pub const WoTOutput: &str = "output";
pub const WoTPSKSecurityScheme: &str = "PSKSecurityScheme";
pub const WoTProperties: &str = "properties";
pub const WoTReadOnly: &str = "readOnly";
pub const WoTRequired: &str = "required";
pub const WoTSecurity: &str = "security";
pub const WoTSupport: &str = "support";
pub const WoTTitle: &str = "title";
pub const WoTTitles: &str = "titles";
pub const WoTVersion: &str = "version";
pub const WotOpCancelAction: &str = "cancelaction";
pub const WotOpInvokeAction: &str = "invokeaction";
pub const WotOpObserveAllProperties: &str = "observeallproperties";
pub const WotOpQueryAction: &str = "queryaction";
pub const WotOpQueryAllAction: &str = "queryallactions";
pub const WotOpReadAllProperties: &str = "readallproperties";
pub const WotOpReadMultipleProperties: &str = "readmultipleproperties";
pub const WotOpSubscribeAllEvents: &str = "subscribeallevents";
pub const WotOpSubscribeEvent: &str = "subscribeevent";
pub const WotOpUnobserveAllProperties: &str = "unobserveallproperties";
pub const WotOpUnsubscribeAllEvents: &str = "unsubscribeallevents";
pub const WotOpUnsubscribeEvent: &str = "unsubscribeevent";
pub const WotOpWriteAllProperties: &str = "writeallproperties";
pub const WotOpWriteMultipleProperties: &str = "writemultipleproperties";
// end of WoTVocab

// type: ActionClasses
// version: 0.1
// source: github.com/hiveot/hub/api/vocab/ht-action-classes.yaml
// namespace: ht
pub const ActionDimmer: &str = "ht:action:dimmer";
pub const ActionDimmerDecrement: &str = "ht:action:dimmer:decrement";
pub const ActionDimmerIncrement: &str = "ht:action:dimmer:increment";
pub const ActionDimmerSet: &str = "ht:action:dimmer:set";
pub const ActionMedia: &str = "ht:action:media";
pub const ActionMediaMute: &str = "ht:action:media:mute";
pub const ActionMediaNext: &str = "ht:action:media:next";
pub const ActionMediaPause: &str = "ht:action:media:pause";
pub const ActionMediaPlay: &str = "ht:action:media:play";
pub const ActionMediaPrevious: &str = "ht:action:media:previous";
pub const ActionMediaUnmute: &str = "ht:action:media:unmute";
pub const ActionMediaVolume: &str = "ht:action:media:volume";
pub const ActionMediaVolumeDecrease: &str = "ht:action:media:volume:decrease";
pub const ActionMediaVolumeIncrease: &str = "ht:action:media:volume:increase";
pub const ActionSwitch: &str = "ht:action:switch";
pub const ActionSwitchOff: &str = "ht:action:switch:off";
pub const ActionSwitchOn: &str = "ht:action:switch:on";
pub const ActionSwitchOnOff: &str = "ht:action:switch:onoff";
pub const ActionSwitchToggle: &str = "ht:action:switch:toggle";
pub const ActionThingDisable: &str = "ht:action:thing:disable";
pub const ActionThingEnable: &str = "ht:action:thing:enable";
pub const ActionThingStart: &str = "ht:action:thing:start";
pub const ActionThingStop: &str = "ht:action:thing:stop";
pub const ActionValveClose: &str = "ht:action:valve:close";
pub const ActionValveOpen: &str = "ht:action:valve:open";
// end of ActionClasses

// type: PropertyClasses
// version: 0.1
// source: github.com/hiveot/hub/api/vocab/ht-property-classes.yaml
// namespace: ht
pub const PropAlarmMotion: &str = "ht:prop:alarm:motion";
pub const PropAlarmStatus: &str = "ht:prop:alarm:status";
pub const PropDevice: &str = "ht:prop:device";
pub const PropDeviceBattery: &str = "ht:prop:device:battery";
pub const PropDeviceDescription: &str = "ht:prop:device:description";
pub const PropDeviceEnabledDisabled: &str = "ht:prop:device:enabled-disabled";
pub const PropDeviceFirmwareVersion: &str = "ht:prop:device:firmwareversion";
pub const PropDeviceHardwareVersion: &str = "ht:prop:device:hardwareversion";
pub const PropDeviceMake: &str = "ht:prop:device:make";
pub const PropDeviceModel: &str = "ht:prop:device:model";
pub const PropDevicePollinterval: &str = "ht:prop:device:pollinterval";
pub const PropDeviceSoftwareVersion: &str = "ht:prop:device:softwareversion";
pub const PropDeviceStatus: &str = "ht:prop:device:status";
pub const PropDeviceTitle: &str = "ht:prop:device:title";
pub const PropElectric: &str = "ht:prop:electric";
pub const PropElectricCurrent: &str = "ht:prop:electric:current";
pub const PropElectricEnergy: &str = "ht:prop:electric:energy";
pub const PropElectricOverload: &str = "ht:prop:electric:overload";
pub const PropElectricPower: &str = "ht:prop:electric:poer";
pub const PropElectricVoltage: &str = "ht:prop:electric:voltage";
pub const PropEnv: &str = "ht:prop:env";
pub const PropEnvAcceleration: &str = "ht:prop:env:acceleration";
pub const PropEnvAirquality: &str = "ht:prop:env:airquality";
pub const PropEnvBarometer: &str = "ht:prop:env:barometer";
pub const PropEnvCO: &str = "ht:prop:env:co";
pub const PropEnvCO2: &str = "ht:prop:env:co2";
pub const PropEnvCpuload: &str = "ht:prop:env:cpuload";
pub const PropEnvDewpoint: &str = "ht:prop:env:dewpoint";
pub const PropEnvFuelFlowrate: &str = "ht:prop:env:fuel:flowrate";
pub const PropEnvFuelLevel: &str = "ht:prop:env:fuel:level";
pub const PropEnvHumidex: &str = "ht:prop:env:humidex";
pub const PropEnvHumidity: &str = "ht:prop:env:humidity";
pub const PropEnvLuminance: &str = "ht:prop:env:luminance";
pub const PropEnvPressure: &str = "ht:prop:env:pressure";
pub const PropEnvTemperature: &str = "ht:prop:env:temperature";
pub const PropEnvTimezone: &str = "ht:prop:env:timezone";
pub const PropEnvUV: &str = "ht:prop:env:uv";
pub const PropEnvVibration: &str = "ht:prop:env:vibration";
pub const PropEnvVolume: &str = "ht:prop:env:volume";
pub const PropEnvWaterFlowrate: &str = "ht:prop:env:water:flowrate";
pub const PropEnvWaterLevel: &str = "ht:prop:env:water:level";
pub const PropEnvWindHeading: &str = "ht:prop:env:wind:heading";
pub const PropEnvWindSpeed: &str = "ht:prop:env:wind:speed";
pub const PropLocation: &str = "ht:prop:location";
pub const PropLocationCity: &str = "ht:prop:location:city";
pub const PropLocationLatitude: &str = "ht:prop:location:latitude";
pub const PropLocationLongitude: &str = "ht:prop:location:longitude";
pub const PropLocationName: &str = "ht:prop:location:name";
pub const PropLocationStreet: &str = "ht:prop:location:street";
pub const PropLocationZipcode: &str = "ht:prop:location:zipcode";
pub const PropMedia: &str = "ht:prop:media";
pub const PropMediaMuted: &str = "ht:prop:media:muted";
pub const PropMediaPaused: &str = "ht:prop:media:paused";
pub const PropMediaPlaying: &str = "ht:prop:media:playing";
pub const PropMediaStation: &str = "ht:prop:media:station";
pub const PropMediaTrack: &str = "ht:prop:media:track";
pub const PropMediaVolume: &str = "ht:prop:media:volume";
pub const PropNet: &str = "ht:prop:net";
pub const PropNetAddress: &str = "ht:prop:net:address";
pub const PropNetConnection: &str = "ht:prop:net:connection";
pub const PropNetDomainname: &str = "ht:prop:net:domainname";
pub const PropNetGateway: &str = "ht:prop:net:gateway";
pub const PropNetHostname: &str = "ht:prop:net:hostname";
pub const PropNetIP4: &str = "ht:prop:net:ip4";
pub const PropNetIP6: &str = "ht:prop:net:ip6";
pub const PropNetLatency: &str = "ht:prop:net:latency";
pub const PropNetMAC: &str = "ht:prop:net:mac";
pub const PropNetMask: &str = "ht:prop:net:mask";
pub const PropNetPort: &str = "ht:prop:net:port";
pub const PropNetSignalstrength: &str = "ht:prop:net:signalstrength";
pub const PropNetSubnet: &str = "ht:prop:net:subnet";
pub const PropStatusOnOff: &str = "ht:prop:status:onoff";
pub const PropStatusOpenClosed: &str = "ht:prop:status:openclosed";
pub const PropStatusStartedStopped: &str = "ht:prop:status:started-stopped";
pub const PropStatusYesNo: &str = "ht:prop:status:yes-no";
pub const PropSwitch: &str = "ht:prop:switch";
pub const PropSwitchDimmer: &str = "ht:prop:switch:dimmer";
pub const PropSwitchLight: &str = "ht:prop:switch:light";
pub const PropSwitchLocked: &str = "ht:prop:switch:locked";
pub const PropSwitchOnOff: &str = "ht:prop:switch:onoff";
// end of PropertyClasses

// type: ThingClasses
// version: 0.1
// source: github.com/hiveot/hub/api/vocab/ht-thing-classes.yaml
// namespace: ht
pub const ThingActuator: &str = "ht:thing:actuator";
pub const ThingActuatorAlarm: &str = "ht:thing:actuator:alarm";
pub const ThingActuatorBeacon: &str = "ht:thing:actuator:beacon";
pub const ThingActuatorDimmer: &str = "ht:thing:actuator:dimmer";
pub const ThingActuatorLight: &str = "ht:thing:actuator:light";
pub const ThingActuatorLock: &str = "ht:thing:actuator:lock";
pub const ThingActuatorMotor: &str = "ht:thing:actuator:motor";
pub const ThingActuatorOutput: &str = "ht:thing:actuator:output";
pub const ThingActuatorRanged: &str = "ht:thing:actuator:ranged";
pub const ThingActuatorRelay: &str = "ht:thing:actuator:relay";
pub const ThingActuatorSwitch: &str = "ht:thing:actuator:switch";
pub const ThingActuatorValve: &str = "ht:thing:actuator:valve";
pub const ThingActuatorValveFuel: &str = "ht:thing:actuator:valve:fuel";
pub const ThingActuatorValveWater: &str = "ht:thing:actuator:valve:water";
pub const ThingAppliance: &str = "ht:thing:appliance";
pub const ThingApplianceDishwasher: &str = "ht:thing:appliance:dishwasher";
pub const ThingApplianceDryer: &str = "ht:thing:appliance:dryer";
pub const ThingApplianceFreezer: &str = "ht:thing:appliance:freezer";
pub const ThingApplianceFridge: &str = "ht:thing:appliance:fridge";
pub const ThingApplianceWasher: &str = "ht:thing:appliance:washer";
pub const ThingComputer: &str = "ht:thing:computer";
pub const ThingComputerCellphone: &str = "ht:thing:computer:cellphone";
pub const ThingComputerEmbedded: &str = "ht:thing:computer:embedded";
pub const ThingComputerMemory: &str = "ht:thing:computer:memory";
pub const ThingComputerPC: &str = "ht:thing:computer:pc";
pub const ThingComputerPotsPhone: &str = "ht:thing:computer:potsphone";
pub const ThingComputerSatPhone: &str = "ht:thing:computer:satphone";
pub const ThingComputerTablet: &str = "ht:thing:computer:tablet";
pub const ThingComputerVoipPhone: &str = "ht:thing:computer:voipphone";
pub const ThingControl: &str = "ht:thing:control";
pub const ThingControlClimate: &str = "ht:thing:control:climate";
pub const ThingControlDimmer: &str = "ht:thing:control:dimmer";
pub const ThingControlIrrigation: &str = "ht:thing:control:irrigation";
pub const ThingControlJoystick: &str = "ht:thing:control:joystick";
pub const ThingControlKeypad: &str = "ht:thing:control:keypad";
pub const ThingControlPool: &str = "ht:thing:control:pool";
pub const ThingControlPushbutton: &str = "ht:thing:control:pushbutton";
pub const ThingControlSwitch: &str = "ht:thing:control:switch";
pub const ThingControlThermostat: &str = "ht:thing:control:thermostat";
pub const ThingControlToggle: &str = "ht:thing:control:toggle";
pub const ThingDevice: &str = "ht:thing:device";
pub const ThingDeviceBatteryMonitor: &str = "ht:thing:device:battery:monitor";
pub const ThingDeviceIndicator: &str = "ht:thing:device:indicator";
pub const ThingDeviceTime: &str = "ht:thing:device:time";
pub const ThingMedia: &str = "ht:thing:media";
pub const ThingMediaAmplifier: &str = "ht:thing:media:amplifier";
pub const ThingMediaCamera: &str = "ht:thing:media:camera";
pub const ThingMediaMicrophone: &str = "ht:thing:media:microphone";
pub const ThingMediaPlayer: &str = "ht:thing:media:player";
pub const ThingMediaRadio: &str = "ht:thing:media:radio";
pub const ThingMediaReceiver: &str = "ht:thing:media:receiver";
pub const ThingMediaSpeaker: &str = "ht:thing:media:speaker";
pub const ThingMediaTV: &str = "ht:thing:media:tv";
pub const ThingMeter: &str = "ht:thing:meter";
pub const ThingMeterElectric: &str = "ht:thing:meter:electric";
pub const ThingMeterElectricCurrent: &str = "ht:thing:meter:electric:current";
pub const ThingMeterElectricEnergy: &str = "ht:thing:meter:electric:energy";
pub const ThingMeterElectricPower: &str = "ht:thing:meter:electric:power";
pub const ThingMeterElectricVoltage: &str = "ht:thing:meter:electric:voltage";
pub const ThingMeterFuel: &str = "ht:thing:meter:fuel";
pub const ThingMeterFuelFlow: &str = "ht:thing:meter:fuel:flow";
pub const ThingMeterFuelLevel: &str = "ht:thing:meter:fuel:level";
pub const ThingMeterWater: &str = "ht:thing:meter:water";
pub const ThingMeterWaterConsumption: &str = "ht:thing:meter:water:consumption";
pub const ThingMeterWaterFlow: &str = "ht:thing:meter:water:flow";
pub const ThingMeterWaterLevel: &str = "ht:thing:meter:water:level";
pub const ThingMeterWind: &str = "ht:thing:meter:wind";
pub const ThingNet: &str = "ht:thing:net";
pub const ThingNetBluetooth: &str = "ht:thing:net:bluetooth";
pub const ThingNetGateway: &str = "ht:thing:net:gateway";
pub const ThingNetGatewayCoap: &str = "ht:thing:net:gateway:coap";
pub const ThingNetGatewayInsteon: &str = "ht:thing:net:gateway:insteon";
pub const ThingNetGatewayOnewire: &str = "ht:thing:net:gateway:onewire";
pub const ThingNetGatewayZigbee: &str = "ht:thing:net:gateway:zigbee";
pub const ThingNetGatewayZwave: &str = "ht:thing:net:gateway:zwave";
pub const ThingNetLora: &str = "ht:thing:net:lora";
pub const ThingNetLoraGateway: &str = "ht:thing:net:lora:gw";
pub const ThingNetLoraP2P: &str = "ht:thing:net:lora:p2p";
pub const ThingNetRouter: &str = "ht:thing:net:router";
pub const ThingNetSwitch: &str = "ht:thing:net:switch";
pub const ThingNetWifi: &str = "ht:thing:net:wifi";
pub const ThingNetWifiAp: &str = "ht:thing:net:wifi:ap";
pub const ThingSensor: &str = "ht:thing:sensor";
pub const ThingSensorEnvironment: &str = "ht:thing:sensor:environment";
pub const ThingSensorInput: &str = "ht:thing:sensor:input";
pub const ThingSensorMulti: &str = "ht:thing:sensor:multi";
pub const ThingSensorScale: &str = "ht:thing:sensor:scale";
pub const ThingSensorSecurity: &str = "ht:thing:sensor:security";
pub const ThingSensorSecurityDoorWindow: &str = "ht:thing:sensor:security:doorwindow";
pub const ThingSensorSecurityGlass: &str = "ht:thing:sensor:security:glass";
pub const ThingSensorSecurityMotion: &str = "ht:thing:sensor:security:motion";
pub const ThingSensorSmoke: &str = "ht:thing:sensor:smoke";
pub const ThingSensorSound: &str = "ht:thing:sensor:sound";
pub const ThingSensorThermometer: &str = "ht:thing:sensor:thermometer";
pub const ThingSensorWaterLeak: &str = "ht:thing:sensor:water:leak";
pub const ThingService: &str = "ht:thing:service";
pub const ThingServiceAdapter: &str = "ht:thing:service:adapter";
pub const ThingServiceAuth: &str = "ht:thing:service:auth";
pub const ThingServiceAutomation: &str = "ht:thing:service:automation";
pub const ThingServiceDirectory: &str = "ht:thing:service:directory";
pub const ThingServiceHistory: &str = "ht:thing:service:history";
pub const ThingServiceImage: &str = "ht:thing:service:image";
pub const ThingServiceSTT: &str = "ht:thing:service:stt";
pub const ThingServiceStore: &str = "ht:thing:service:store";
pub const ThingServiceTTS: &str = "ht:thing:service:tts";
pub const ThingServiceTranslation: &str = "ht:thing:service:translation";
pub const ThingServiceWeather: &str = "ht:thing:service:weather";
pub const ThingServiceWeatherCurrent: &str = "ht:thing:service:weather:current";
pub const ThingServiceWeatherForecast: &str = "ht:thing:service:weather:forecast";
// end of ThingClasses

// type: UnitClasses
// version: 0.1
// source: github.com/hiveot/hub/api/vocab/ht-unit-classes.yaml
// namespace: ht
pub const UnitAmpere: &str = "ht:unit:ampere";
pub const UnitCandela: &str = "ht:unit:candela";
pub const UnitCelcius: &str = "ht:unit:celcius";
pub const UnitCount: &str = "ht:unit:count";
pub const UnitDegree: &str = "ht:unit:degree";
pub const UnitFahrenheit: &str = "ht:unit:fahrenheit";
pub const UnitFoot: &str = "ht:unit:foot";
pub const UnitGallon: &str = "ht:unit:gallon";
pub const UnitKelvin: &str = "ht:unit:kelvin";
pub const UnitKilogram: &str = "ht:unit:kilogram";
pub const UnitKilometerPerHour: &str = "ht:unit:kph";
pub const UnitKilowattHour: &str = "ht:unit:kilowatthour";
pub const UnitLiter: &str = "ht:unit:liter";
pub const UnitLumen: &str = "ht:unit:lumen";
pub const UnitLux: &str = "ht:unit:lux";
pub const UnitMercury: &str = "ht:unit:mercury";
pub const UnitMeter: &str = "ht:unit:meter";
pub const UnitMeterPerSecond: &str = "ht:unit:meterspersecond";
pub const UnitMilesPerHour: &str = "ht:unit:milesperhour";
pub const UnitMilliSecond: &str = "ht:unit:millisecond";
pub const UnitMillibar: &str = "ht:unit:millibar";
pub const UnitMole: &str = "ht:unit:mole";
pub const UnitPSI: &str = "ht:unit:psi";
pub const UnitPascal: &str = "ht:unit:pascal";
pub const UnitPercent: &str = "ht:unit:percent";
pub const UnitPound: &str = "ht:unit:pound";
pub const UnitPpm: &str = "ht:unit:ppm";
pub const UnitRadian: &str = "ht:unit:radian";
pub const UnitSecond: &str = "ht:unit:second";
pub const UnitVolt: &str = "ht:unit:volt";
pub const UnitWatt: &str = "ht:unit:watt";
// end of UnitClasses

pub static CONSTANT_GROUPS: &[ConstantGroup] = &[
    ConstantGroup {
        name: "MessageTypes",
        version: "0.1",
        source: "github.com/hiveot/hub/api/vocab/ht-constants.yaml",
        description: "Message types used throughout the Hub and its clients",
        terms: &[
            Term { name: "EventNameDeliveryUpdate", value: EventNameDeliveryUpdate },
            Term { name: "EventNameProperties", value: EventNameProperties },
            Term { name: "EventNameTD", value: EventNameTD },
            Term { name: "MessageTypeAction", value: MessageTypeAction },
            Term { name: "MessageTypeDeliveryUpdate", value: MessageTypeDeliveryUpdate },
            Term { name: "MessageTypeEvent", value: MessageTypeEvent },
            Term { name: "MessageTypeProperty", value: MessageTypeProperty },
        ],
    },
    ConstantGroup {
        name: "WoTVocab",
        version: "0.1",
        source: "github.com/hiveot/hub/api/vocab/wot-vocab.yaml",
        description: "WoT vocabulary definition. See https://www.w3.org/TR/2020/WD-wot-thing-description11-20201124/#sec-core-vocabulary-definition",
        terms: &[
            Term { name: "WoTAPIKeySecurityScheme", value: WoTAPIKeySecurityScheme },
            Term { name: "WoTActions", value: WoTActions },
            Term { name: "WoTAnyURI", value: WoTAnyURI },
            Term { name: "WoTAtContext", value: WoTAtContext },
            Term { name: "WoTAtType", value: WoTAtType },
            Term { name: "WoTBasicSecurityScheme", value: WoTBasicSecurityScheme },
            Term { name: "WoTBearerSecurityScheme", value: WoTBearerSecurityScheme },
            Term { name: "WoTConst", value: WoTConst },
            Term { name: "WoTCreated", value: WoTCreated },
            Term { name: "WoTDataType", value: WoTDataType },
            Term { name: "WoTDataTypeAnyURI", value: WoTDataTypeAnyURI },
            Term { name: "WoTDataTypeArray", value: WoTDataTypeArray },
            Term { name: "WoTDataTypeBool", value: WoTDataTypeBool },
            Term { name: "WoTDataTypeDateTime", value: WoTDataTypeDateTime },
            Term { name: "WoTDataTypeInteger", value: WoTDataTypeInteger },
            Term { name: "WoTDataTypeNone", value: WoTDataTypeNone },
            Term { name: "WoTDataTypeNumber", value: WoTDataTypeNumber },
            Term { name: "WoTDataTypeObject", value: WoTDataTypeObject },
            Term { name: "WoTDataTypeString", value: WoTDataTypeString },
            Term { name: "WoTDataTypeUnsignedInt", value: WoTDataTypeUnsignedInt },
            Term { name: "WoTDescription", value: WoTDescription },
            Term { name: "WoTDescriptions", value: WoTDescriptions },
            Term { name: "WoTDigestSecurityScheme", value: WoTDigestSecurityScheme },
            Term { name: "WoTEnum", value: WoTEnum },
            Term { name: "WoTEvents", value: WoTEvents },
            Term { name: "WoTFormat", value: WoTFormat },
            Term { name: "WoTForms", value: WoTForms },
            Term { name: "WoTHref", value: WoTHref },
            Term { name: "WoTID", value: WoTID },
            Term { name: "WoTInput", value: WoTInput },
            Term { name: "WoTLinks", value: WoTLinks },
            Term { name: "WoTMaxItems", value: WoTMaxItems },
            Term { name: "WoTMaxLength", value: WoTMaxLength },
            Term { name: "WoTMaximum", value: WoTMaximum },
            Term { name: "WoTMinItems", value: WoTMinItems },
            Term { name: "WoTMinLength", value: WoTMinLength },
            Term { name: "WoTMinimum", value: WoTMinimum },
            Term { name: "WoTModified", value: WoTModified },
            Term { name: "WoTNoSecurityScheme", value: WoTNoSecurityScheme },
            Term { name: "WoTOAuth2SecurityScheme", value: WoTOAuth2SecurityScheme },
            Term { name: "WoTOpObserveProperty", value: WoTOpObserveProperty },
            Term { name: "WoTOpReadProperty", value: WoTOpReadProperty },
            Term { name: "WoTOpUnobserveProperty", value: WoTOpUnobserveProperty },
            Term { name: "WoTOpWriteProperty", value: WoTOpWriteProperty },
            Term { name: "WoTOperation", value: WoTOperation },
            Term { name: "WoTOutput", value: WoTOutput },
            Term { name: "WoTPSKSecurityScheme", value: WoTPSKSecurityScheme },
            Term { name: "WoTProperties", value: WoTProperties },
            Term { name: "WoTReadOnly", value: WoTReadOnly },
            Term { name: "WoTRequired", value: WoTRequired },
            Term { name: "WoTSecurity", value: WoTSecurity },
            Term { name: "WoTSupport", value: WoTSupport },
            Term { name: "WoTTitle", value: WoTTitle },
            Term { name: "WoTTitles", value: WoTTitles },
            Term { name: "WoTVersion", value: WoTVersion },
            Term { name: "WotOpCancelAction", value: WotOpCancelAction },
            Term { name: "WotOpInvokeAction", value: WotOpInvokeAction },
            Term { name: "WotOpObserveAllProperties", value: WotOpObserveAllProperties },
            Term { name: "WotOpQueryAction", value: WotOpQueryAction },
            Term { name: "WotOpQueryAllAction", value: WotOpQueryAllAction },
            Term { name: "WotOpReadAllProperties", value: WotOpReadAllProperties },
            Term { name: "WotOpReadMultipleProperties", value: WotOpReadMultipleProperties },
            Term { name: "WotOpSubscribeAllEvents", value: WotOpSubscribeAllEvents },
            Term { name: "WotOpSubscribeEvent", value: WotOpSubscribeEvent },
            Term { name: "WotOpUnobserveAllProperties", value: WotOpUnobserveAllProperties },
            Term { name: "WotOpUnsubscribeAllEvents", value: WotOpUnsubscribeAllEvents },
            Term { name: "WotOpUnsubscribeEvent", value: WotOpUnsubscribeEvent },
            Term { name: "WotOpWriteAllProperties", value: WotOpWriteAllProperties },
            Term { name: "WotOpWriteMultipleProperties", value: WotOpWriteMultipleProperties },
        ],
    },
];

pub static CLASS_TABLES: &[ClassTable] = &[
    ClassTable {
        family: ClassFamily::Action,
        name: "ActionClasses",
        version: "0.1",
        source: "github.com/hiveot/hub/api/vocab/ht-action-classes.yaml",
        namespace: "ht",
        entries: &[
            ClassEntry {
                name: "ActionDimmer",
                id: ActionDimmer,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Dimmer",
                    description: "General dimmer action",
                },
            },
            ClassEntry {
                name: "ActionDimmerDecrement",
                id: ActionDimmerDecrement,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Lower dimmer",
                    description: "",
                },
            },
            ClassEntry {
                name: "ActionDimmerIncrement",
                id: ActionDimmerIncrement,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Increase dimmer",
                    description: "",
                },
            },
            ClassEntry {
                name: "ActionDimmerSet",
                id: ActionDimmerSet,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Set dimmer",
                    description: "Action to set the dimmer value",
                },
            },
            ClassEntry {
                name: "ActionMedia",
                id: ActionMedia,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Media control",
                    description: "Commands to control media recording and playback",
                },
            },
            ClassEntry {
                name: "ActionMediaMute",
                id: ActionMediaMute,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Mute",
                    description: "Mute audio",
                },
            },
            ClassEntry {
                name: "ActionMediaNext",
                id: ActionMediaNext,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Next",
                    description: "Next track or station",
                },
            },
            ClassEntry {
                name: "ActionMediaPause",
                id: ActionMediaPause,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Pause",
                    description: "Pause playback",
                },
            },
            ClassEntry {
                name: "ActionMediaPlay",
                id: ActionMediaPlay,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Play",
                    description: "Start or continue playback",
                },
            },
            ClassEntry {
                name: "ActionMediaPrevious",
                id: ActionMediaPrevious,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Previous",
                    description: "Previous track or station",
                },
            },
            ClassEntry {
                name: "ActionMediaUnmute",
                id: ActionMediaUnmute,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Unmute",
                    description: "Unmute audio",
                },
            },
            ClassEntry {
                name: "ActionMediaVolume",
                id: ActionMediaVolume,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Volume",
                    description: "Set volume level",
                },
            },
            ClassEntry {
                name: "ActionMediaVolumeDecrease",
                id: ActionMediaVolumeDecrease,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Decrease volume",
                    description: "Decrease volume",
                },
            },
            ClassEntry {
                name: "ActionMediaVolumeIncrease",
                id: ActionMediaVolumeIncrease,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Increase volume",
                    description: "Increase volume",
                },
            },
            ClassEntry {
                name: "ActionSwitch",
                id: ActionSwitch,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Switch",
                    description: "General switch action",
                },
            },
            ClassEntry {
                name: "ActionSwitchOff",
                id: ActionSwitchOff,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Switch off",
                    description: "Action to turn the switch off",
                },
            },
            ClassEntry {
                name: "ActionSwitchOn",
                id: ActionSwitchOn,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Switch on",
                    description: "Action to turn the switch on",
                },
            },
            ClassEntry {
                name: "ActionSwitchOnOff",
                id: ActionSwitchOnOff,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Set On/Off switch",
                    description: "Action to set the switch on/off state",
                },
            },
            ClassEntry {
                name: "ActionSwitchToggle",
                id: ActionSwitchToggle,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Toggle switch",
                    description: "Action to toggle the switch",
                },
            },
            ClassEntry {
                name: "ActionThingDisable",
                id: ActionThingDisable,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Disable",
                    description: "Action to disable a thing",
                },
            },
            ClassEntry {
                name: "ActionThingEnable",
                id: ActionThingEnable,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Enable",
                    description: "Action to enable a thing",
                },
            },
            ClassEntry {
                name: "ActionThingStart",
                id: ActionThingStart,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Start",
                    description: "Start running a task",
                },
            },
            ClassEntry {
                name: "ActionThingStop",
                id: ActionThingStop,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Stop",
                    description: "Stop a running task",
                },
            },
            ClassEntry {
                name: "ActionValveClose",
                id: ActionValveClose,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Close valve",
                    description: "Action to close the valve",
                },
            },
            ClassEntry {
                name: "ActionValveOpen",
                id: ActionValveOpen,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Open valve",
                    description: "Action to open the valve",
                },
            },
        ],
    },
    ClassTable {
        family: ClassFamily::Property,
        name: "PropertyClasses",
        version: "0.1",
        source: "github.com/hiveot/hub/api/vocab/ht-property-classes.yaml",
        namespace: "ht",
        entries: &[
            ClassEntry {
                name: "PropAlarmMotion",
                id: PropAlarmMotion,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Motion",
                    description: "Motion detected",
                },
            },
            ClassEntry {
                name: "PropAlarmStatus",
                id: PropAlarmStatus,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Alarm state",
                    description: "Current alarm status",
                },
            },
            ClassEntry {
                name: "PropDevice",
                id: PropDevice,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Device attributes",
                    description: "Attributes describing a device",
                },
            },
            ClassEntry {
                name: "PropDeviceBattery",
                id: PropDeviceBattery,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Battery level",
                    description: "Device battery level",
                },
            },
            ClassEntry {
                name: "PropDeviceDescription",
                id: PropDeviceDescription,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Description",
                    description: "Device product description",
                },
            },
            ClassEntry {
                name: "PropDeviceEnabledDisabled",
                id: PropDeviceEnabledDisabled,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Enabled/Disabled",
                    description: "Enabled or disabled state",
                },
            },
            ClassEntry {
                name: "PropDeviceFirmwareVersion",
                id: PropDeviceFirmwareVersion,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Firmware version",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropDeviceHardwareVersion",
                id: PropDeviceHardwareVersion,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Hardware version",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropDeviceMake",
                id: PropDeviceMake,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Make",
                    description: "Device manufacturer",
                },
            },
            ClassEntry {
                name: "PropDeviceModel",
                id: PropDeviceModel,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Model",
                    description: "Device model",
                },
            },
            ClassEntry {
                name: "PropDevicePollinterval",
                id: PropDevicePollinterval,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Polling interval",
                    description: "Interval to poll for updates",
                },
            },
            ClassEntry {
                name: "PropDeviceSoftwareVersion",
                id: PropDeviceSoftwareVersion,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Software version",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropDeviceStatus",
                id: PropDeviceStatus,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Status",
                    description: "Device status; alive, awake, dead, sleeping",
                },
            },
            ClassEntry {
                name: "PropDeviceTitle",
                id: PropDeviceTitle,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Title",
                    description: "Device friendly title",
                },
            },
            ClassEntry {
                name: "PropElectric",
                id: PropElectric,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Electrical properties",
                    description: "General group of electrical properties",
                },
            },
            ClassEntry {
                name: "PropElectricCurrent",
                id: PropElectricCurrent,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Current",
                    description: "Electrical current",
                },
            },
            ClassEntry {
                name: "PropElectricEnergy",
                id: PropElectricEnergy,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Energy",
                    description: "Electrical energy consumed",
                },
            },
            ClassEntry {
                name: "PropElectricOverload",
                id: PropElectricOverload,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Overload protection",
                    description: "Cut load on overload",
                },
            },
            ClassEntry {
                name: "PropElectricPower",
                id: PropElectricPower,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Power",
                    description: "Electrical power being consumed",
                },
            },
            ClassEntry {
                name: "PropElectricVoltage",
                id: PropElectricVoltage,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Voltage",
                    description: "Electrical voltage potential",
                },
            },
            ClassEntry {
                name: "PropEnv",
                id: PropEnv,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Environmental property",
                    description: "Property of environmental sensor",
                },
            },
            ClassEntry {
                name: "PropEnvAcceleration",
                id: PropEnvAcceleration,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Acceleration",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvAirquality",
                id: PropEnvAirquality,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Air quality",
                    description: "Air quality level",
                },
            },
            ClassEntry {
                name: "PropEnvBarometer",
                id: PropEnvBarometer,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Atmospheric pressure",
                    description: "Barometric pressure of the atmosphere",
                },
            },
            ClassEntry {
                name: "PropEnvCO",
                id: PropEnvCO,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Carbon monoxide level",
                    description: "Carbon monoxide level",
                },
            },
            ClassEntry {
                name: "PropEnvCO2",
                id: PropEnvCO2,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Carbon dioxide level",
                    description: "Carbon dioxide level",
                },
            },
            ClassEntry {
                name: "PropEnvCpuload",
                id: PropEnvCpuload,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "CPU load level",
                    description: "Device CPU load level",
                },
            },
            ClassEntry {
                name: "PropEnvDewpoint",
                id: PropEnvDewpoint,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Dew point",
                    description: "Dew point temperature",
                },
            },
            ClassEntry {
                name: "PropEnvFuelFlowrate",
                id: PropEnvFuelFlowrate,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Fuel flow rate",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvFuelLevel",
                id: PropEnvFuelLevel,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Fuel level",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvHumidex",
                id: PropEnvHumidex,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Humidex",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvHumidity",
                id: PropEnvHumidity,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Humidity",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvLuminance",
                id: PropEnvLuminance,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Luminance",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvPressure",
                id: PropEnvPressure,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Pressure",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvTemperature",
                id: PropEnvTemperature,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Temperature",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvTimezone",
                id: PropEnvTimezone,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Timezone",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvUV",
                id: PropEnvUV,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "UV",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvVibration",
                id: PropEnvVibration,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Vibration",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvVolume",
                id: PropEnvVolume,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Volume",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvWaterFlowrate",
                id: PropEnvWaterFlowrate,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Water flow rate",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvWaterLevel",
                id: PropEnvWaterLevel,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Water level",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvWindHeading",
                id: PropEnvWindHeading,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Wind heading",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropEnvWindSpeed",
                id: PropEnvWindSpeed,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Wind speed",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropLocation",
                id: PropLocation,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Location",
                    description: "General location information",
                },
            },
            ClassEntry {
                name: "PropLocationCity",
                id: PropLocationCity,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "City",
                    description: "City name",
                },
            },
            ClassEntry {
                name: "PropLocationLatitude",
                id: PropLocationLatitude,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Latitude",
                    description: "Latitude geographic coordinate",
                },
            },
            ClassEntry {
                name: "PropLocationLongitude",
                id: PropLocationLongitude,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Longitude",
                    description: "Longitude geographic coordinate",
                },
            },
            ClassEntry {
                name: "PropLocationName",
                id: PropLocationName,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Location name",
                    description: "Name of the location",
                },
            },
            ClassEntry {
                name: "PropLocationStreet",
                id: PropLocationStreet,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Street",
                    description: "Street address",
                },
            },
            ClassEntry {
                name: "PropLocationZipcode",
                id: PropLocationZipcode,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Zip code",
                    description: "Location ZIP code",
                },
            },
            ClassEntry {
                name: "PropMedia",
                id: PropMedia,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Media commands",
                    description: "Control of media equipment",
                },
            },
            ClassEntry {
                name: "PropMediaMuted",
                id: PropMediaMuted,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Muted",
                    description: "Audio is muted",
                },
            },
            ClassEntry {
                name: "PropMediaPaused",
                id: PropMediaPaused,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Paused",
                    description: "Media is paused",
                },
            },
            ClassEntry {
                name: "PropMediaPlaying",
                id: PropMediaPlaying,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Playing",
                    description: "Media is playing",
                },
            },
            ClassEntry {
                name: "PropMediaStation",
                id: PropMediaStation,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Station",
                    description: "Selected radio station",
                },
            },
            ClassEntry {
                name: "PropMediaTrack",
                id: PropMediaTrack,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Track",
                    description: "Selected A/V track",
                },
            },
            ClassEntry {
                name: "PropMediaVolume",
                id: PropMediaVolume,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Volume",
                    description: "Media volume setting",
                },
            },
            ClassEntry {
                name: "PropNet",
                id: PropNet,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Network properties",
                    description: "General network properties",
                },
            },
            ClassEntry {
                name: "PropNetAddress",
                id: PropNetAddress,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Address",
                    description: "Network address",
                },
            },
            ClassEntry {
                name: "PropNetConnection",
                id: PropNetConnection,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Connection",
                    description: "Connection status, connected, connecting, retrying, disconnected,...",
                },
            },
            ClassEntry {
                name: "PropNetDomainname",
                id: PropNetDomainname,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Domain name",
                    description: "Domainname of the client",
                },
            },
            ClassEntry {
                name: "PropNetGateway",
                id: PropNetGateway,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Gateway",
                    description: "Network gateway address",
                },
            },
            ClassEntry {
                name: "PropNetHostname",
                id: PropNetHostname,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Hostname",
                    description: "Hostname of the client",
                },
            },
            ClassEntry {
                name: "PropNetIP4",
                id: PropNetIP4,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "IP4 address",
                    description: "Device IP4 address",
                },
            },
            ClassEntry {
                name: "PropNetIP6",
                id: PropNetIP6,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "IP6 address",
                    description: "Device IP6 address",
                },
            },
            ClassEntry {
                name: "PropNetLatency",
                id: PropNetLatency,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Network latency",
                    description: "Delay between hub and client",
                },
            },
            ClassEntry {
                name: "PropNetMAC",
                id: PropNetMAC,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "MAC",
                    description: "Hardware MAC address",
                },
            },
            ClassEntry {
                name: "PropNetMask",
                id: PropNetMask,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Netmask",
                    description: "Network mask. Example: 255.255.255.0 or 24/8",
                },
            },
            ClassEntry {
                name: "PropNetPort",
                id: PropNetPort,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Port",
                    description: "Network port",
                },
            },
            ClassEntry {
                name: "PropNetSignalstrength",
                id: PropNetSignalstrength,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Signal strength",
                    description: "Wireless signal strength",
                },
            },
            ClassEntry {
                name: "PropNetSubnet",
                id: PropNetSubnet,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Subnet",
                    description: "Network subnet address. Example: 192.168.0.0",
                },
            },
            ClassEntry {
                name: "PropStatusOnOff",
                id: PropStatusOnOff,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "On/off status",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropStatusOpenClosed",
                id: PropStatusOpenClosed,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Open/Closed status",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropStatusStartedStopped",
                id: PropStatusStartedStopped,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Started/Stopped",
                    description: "Started or stopped status",
                },
            },
            ClassEntry {
                name: "PropStatusYesNo",
                id: PropStatusYesNo,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Yes/No",
                    description: "Status with yes or no value",
                },
            },
            ClassEntry {
                name: "PropSwitch",
                id: PropSwitch,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Switch status",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropSwitchDimmer",
                id: PropSwitchDimmer,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Dimmer value",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropSwitchLight",
                id: PropSwitchLight,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Light switch",
                    description: "",
                },
            },
            ClassEntry {
                name: "PropSwitchLocked",
                id: PropSwitchLocked,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Lock",
                    description: "Electric lock status",
                },
            },
            ClassEntry {
                name: "PropSwitchOnOff",
                id: PropSwitchOnOff,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "On/Off switch",
                    description: "",
                },
            },
        ],
    },
    ClassTable {
        family: ClassFamily::Thing,
        name: "ThingClasses",
        version: "0.1",
        source: "github.com/hiveot/hub/api/vocab/ht-thing-classes.yaml",
        namespace: "ht",
        entries: &[
            ClassEntry {
                name: "ThingActuator",
                id: ThingActuator,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Actuator",
                    description: "Generic actuator",
                },
            },
            ClassEntry {
                name: "ThingActuatorAlarm",
                id: ThingActuatorAlarm,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Alarm",
                    description: "Siren or light alarm",
                },
            },
            ClassEntry {
                name: "ThingActuatorBeacon",
                id: ThingActuatorBeacon,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Beacon",
                    description: "Location beacon",
                },
            },
            ClassEntry {
                name: "ThingActuatorDimmer",
                id: ThingActuatorDimmer,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Dimmer",
                    description: "Light dimmer",
                },
            },
            ClassEntry {
                name: "ThingActuatorLight",
                id: ThingActuatorLight,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Light",
                    description: "Smart LED or other light",
                },
            },
            ClassEntry {
                name: "ThingActuatorLock",
                id: ThingActuatorLock,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Lock",
                    description: "Electronic door lock",
                },
            },
            ClassEntry {
                name: "ThingActuatorMotor",
                id: ThingActuatorMotor,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Motor",
                    description: "Motor driven actuator, such as garage door, blinds, tv lifts",
                },
            },
            ClassEntry {
                name: "ThingActuatorOutput",
                id: ThingActuatorOutput,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Output",
                    description: "General purpose electrical output signal",
                },
            },
            ClassEntry {
                name: "ThingActuatorRanged",
                id: ThingActuatorRanged,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Ranged actuator",
                    description: "Generic ranged actuator with a set point",
                },
            },
            ClassEntry {
                name: "ThingActuatorRelay",
                id: ThingActuatorRelay,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Relay",
                    description: "Generic relay electrical switch",
                },
            },
            ClassEntry {
                name: "ThingActuatorSwitch",
                id: ThingActuatorSwitch,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Switch",
                    description: "An electric powered on/off switch for powering circuits",
                },
            },
            ClassEntry {
                name: "ThingActuatorValve",
                id: ThingActuatorValve,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Valve",
                    description: "Electric powered valve for fluids or gas",
                },
            },
            ClassEntry {
                name: "ThingActuatorValveFuel",
                id: ThingActuatorValveFuel,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Fuel valve",
                    description: "Electric powered fuel valve",
                },
            },
            ClassEntry {
                name: "ThingActuatorValveWater",
                id: ThingActuatorValveWater,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Water valve",
                    description: "Electric powered water valve",
                },
            },
            ClassEntry {
                name: "ThingAppliance",
                id: ThingAppliance,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Appliance",
                    description: "Appliance to accomplish a particular task for occupant use",
                },
            },
            ClassEntry {
                name: "ThingApplianceDishwasher",
                id: ThingApplianceDishwasher,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Dishwasher",
                    description: "Dishwasher",
                },
            },
            ClassEntry {
                name: "ThingApplianceDryer",
                id: ThingApplianceDryer,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Dryer",
                    description: "Clothing dryer",
                },
            },
            ClassEntry {
                name: "ThingApplianceFreezer",
                id: ThingApplianceFreezer,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Freezer",
                    description: "Refrigerator freezer",
                },
            },
            ClassEntry {
                name: "ThingApplianceFridge",
                id: ThingApplianceFridge,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Fridge",
                    description: "Refrigerator appliance",
                },
            },
            ClassEntry {
                name: "ThingApplianceWasher",
                id: ThingApplianceWasher,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Washer",
                    description: "Clothing washer",
                },
            },
            ClassEntry {
                name: "ThingComputer",
                id: ThingComputer,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Computing Device",
                    description: "General purpose computing device",
                },
            },
            ClassEntry {
                name: "ThingComputerCellphone",
                id: ThingComputerCellphone,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Cell Phone",
                    description: "Cellular phone",
                },
            },
            ClassEntry {
                name: "ThingComputerEmbedded",
                id: ThingComputerEmbedded,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Embedded System",
                    description: "Embedded computing device",
                },
            },
            ClassEntry {
                name: "ThingComputerMemory",
                id: ThingComputerMemory,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Memory",
                    description: "Stand-alone memory device such as eeprom or iButtons",
                },
            },
            ClassEntry {
                name: "ThingComputerPC",
                id: ThingComputerPC,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "PC/Laptop",
                    description: "Personal computer/laptop",
                },
            },
            ClassEntry {
                name: "ThingComputerPotsPhone",
                id: ThingComputerPotsPhone,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Land Line",
                    description: "Plain Old Telephone System, aka landline",
                },
            },
            ClassEntry {
                name: "ThingComputerSatPhone",
                id: ThingComputerSatPhone,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Satellite phone",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingComputerTablet",
                id: ThingComputerTablet,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Tablet",
                    description: "Tablet computer",
                },
            },
            ClassEntry {
                name: "ThingComputerVoipPhone",
                id: ThingComputerVoipPhone,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "VoIP Phone",
                    description: "Voice over IP phone",
                },
            },
            ClassEntry {
                name: "ThingControl",
                id: ThingControl,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Input controller",
                    description: "Generic input controller",
                },
            },
            ClassEntry {
                name: "ThingControlClimate",
                id: ThingControlClimate,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Climate control",
                    description: "Device for controlling climate of a space",
                },
            },
            ClassEntry {
                name: "ThingControlDimmer",
                id: ThingControlDimmer,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Dimmer",
                    description: "Light dimmer input device",
                },
            },
            ClassEntry {
                name: "ThingControlIrrigation",
                id: ThingControlIrrigation,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Irrigation control",
                    description: "Device for control of an irrigation system",
                },
            },
            ClassEntry {
                name: "ThingControlJoystick",
                id: ThingControlJoystick,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Joystick",
                    description: "Flight control stick",
                },
            },
            ClassEntry {
                name: "ThingControlKeypad",
                id: ThingControlKeypad,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Keypad",
                    description: "Multi-key pad for command input",
                },
            },
            ClassEntry {
                name: "ThingControlPool",
                id: ThingControlPool,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Pool control",
                    description: "Device for controlling pool settings",
                },
            },
            ClassEntry {
                name: "ThingControlPushbutton",
                id: ThingControlPushbutton,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Momentary switch",
                    description: "Momentary push button control input",
                },
            },
            ClassEntry {
                name: "ThingControlSwitch",
                id: ThingControlSwitch,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Input switch",
                    description: "On or off switch input control",
                },
            },
            ClassEntry {
                name: "ThingControlThermostat",
                id: ThingControlThermostat,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Thermostat",
                    description: "Thermostat HVAC control",
                },
            },
            ClassEntry {
                name: "ThingControlToggle",
                id: ThingControlToggle,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Toggle switch",
                    description: "Toggle switch input control",
                },
            },
            ClassEntry {
                name: "ThingDevice",
                id: ThingDevice,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Device",
                    description: "Device of unknown purpose",
                },
            },
            ClassEntry {
                name: "ThingDeviceBatteryMonitor",
                id: ThingDeviceBatteryMonitor,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Battery Monitor",
                    description: "Battery monitor and charge controller",
                },
            },
            ClassEntry {
                name: "ThingDeviceIndicator",
                id: ThingDeviceIndicator,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Indicator",
                    description: "Visual or audio indicator device",
                },
            },
            ClassEntry {
                name: "ThingDeviceTime",
                id: ThingDeviceTime,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Clock",
                    description: "Time tracking device such as clocks and time chips",
                },
            },
            ClassEntry {
                name: "ThingMedia",
                id: ThingMedia,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "A/V media",
                    description: "Generic device for audio/video media record or playback",
                },
            },
            ClassEntry {
                name: "ThingMediaAmplifier",
                id: ThingMediaAmplifier,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Audio amplifier",
                    description: "Audio amplifier with volume controls",
                },
            },
            ClassEntry {
                name: "ThingMediaCamera",
                id: ThingMediaCamera,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Camera",
                    description: "Video camera",
                },
            },
            ClassEntry {
                name: "ThingMediaMicrophone",
                id: ThingMediaMicrophone,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Microphone",
                    description: "Microphone for capturing audio",
                },
            },
            ClassEntry {
                name: "ThingMediaPlayer",
                id: ThingMediaPlayer,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Media player",
                    description: "CD/DVD/Blueray/USB player of recorded media",
                },
            },
            ClassEntry {
                name: "ThingMediaRadio",
                id: ThingMediaRadio,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Radio",
                    description: "AM or FM radio receiver",
                },
            },
            ClassEntry {
                name: "ThingMediaReceiver",
                id: ThingMediaReceiver,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Receiver",
                    description: "Audio/video receiver and player",
                },
            },
            ClassEntry {
                name: "ThingMediaSpeaker",
                id: ThingMediaSpeaker,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Connected speakers",
                    description: "Network connected speakers",
                },
            },
            ClassEntry {
                name: "ThingMediaTV",
                id: ThingMediaTV,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "TV",
                    description: "Network connected television",
                },
            },
            ClassEntry {
                name: "ThingMeter",
                id: ThingMeter,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Meter",
                    description: "General metering device",
                },
            },
            ClassEntry {
                name: "ThingMeterElectric",
                id: ThingMeterElectric,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingMeterElectricCurrent",
                id: ThingMeterElectricCurrent,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Electric current",
                    description: "Electrical current meter",
                },
            },
            ClassEntry {
                name: "ThingMeterElectricEnergy",
                id: ThingMeterElectricEnergy,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Electric energy",
                    description: "Electrical energy meter",
                },
            },
            ClassEntry {
                name: "ThingMeterElectricPower",
                id: ThingMeterElectricPower,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Electrical Power",
                    description: "Electrical power meter",
                },
            },
            ClassEntry {
                name: "ThingMeterElectricVoltage",
                id: ThingMeterElectricVoltage,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Voltage",
                    description: "Electrical voltage meter",
                },
            },
            ClassEntry {
                name: "ThingMeterFuel",
                id: ThingMeterFuel,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Fuel metering device",
                    description: "General fuel metering device",
                },
            },
            ClassEntry {
                name: "ThingMeterFuelFlow",
                id: ThingMeterFuelFlow,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Fuel flow rate",
                    description: "Dedicated fuel flow rate metering device",
                },
            },
            ClassEntry {
                name: "ThingMeterFuelLevel",
                id: ThingMeterFuelLevel,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Fuel level",
                    description: "Dedicated fuel level metering device",
                },
            },
            ClassEntry {
                name: "ThingMeterWater",
                id: ThingMeterWater,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Water metering device",
                    description: "General water metering device",
                },
            },
            ClassEntry {
                name: "ThingMeterWaterConsumption",
                id: ThingMeterWaterConsumption,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Water consumption meter",
                    description: "Water consumption meter",
                },
            },
            ClassEntry {
                name: "ThingMeterWaterFlow",
                id: ThingMeterWaterFlow,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Water flow",
                    description: "Dedicated water flow-rate meter",
                },
            },
            ClassEntry {
                name: "ThingMeterWaterLevel",
                id: ThingMeterWaterLevel,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Water level",
                    description: "Dedicated water level meter",
                },
            },
            ClassEntry {
                name: "ThingMeterWind",
                id: ThingMeterWind,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Wind",
                    description: "Dedicated wind meter",
                },
            },
            ClassEntry {
                name: "ThingNet",
                id: ThingNet,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Network device",
                    description: "Generic network device",
                },
            },
            ClassEntry {
                name: "ThingNetBluetooth",
                id: ThingNetBluetooth,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Bluetooth",
                    description: "Bluetooth radio",
                },
            },
            ClassEntry {
                name: "ThingNetGateway",
                id: ThingNetGateway,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Gateway",
                    description: "Generic gateway device providing access to other devices",
                },
            },
            ClassEntry {
                name: "ThingNetGatewayCoap",
                id: ThingNetGatewayCoap,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "CoAP gateway",
                    description: "Gateway providing access to CoAP devices",
                },
            },
            ClassEntry {
                name: "ThingNetGatewayInsteon",
                id: ThingNetGatewayInsteon,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Insteon gateway",
                    description: "Gateway providing access to Insteon devices",
                },
            },
            ClassEntry {
                name: "ThingNetGatewayOnewire",
                id: ThingNetGatewayOnewire,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "1-Wire gateway",
                    description: "Gateway providing access to 1-wire devices",
                },
            },
            ClassEntry {
                name: "ThingNetGatewayZigbee",
                id: ThingNetGatewayZigbee,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Zigbee gateway",
                    description: "Gateway providing access to Zigbee devices",
                },
            },
            ClassEntry {
                name: "ThingNetGatewayZwave",
                id: ThingNetGatewayZwave,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "ZWave gateway",
                    description: "Gateway providing access to ZWave devices",
                },
            },
            ClassEntry {
                name: "ThingNetLora",
                id: ThingNetLora,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "LoRa network device",
                    description: "Generic Long Range network protocol device",
                },
            },
            ClassEntry {
                name: "ThingNetLoraGateway",
                id: ThingNetLoraGateway,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "LoRaWAN gateway",
                    description: "Gateway providing access to LoRa devices",
                },
            },
            ClassEntry {
                name: "ThingNetLoraP2P",
                id: ThingNetLoraP2P,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "LoRa P2P",
                    description: "LoRa Peer-to-peer network device",
                },
            },
            ClassEntry {
                name: "ThingNetRouter",
                id: ThingNetRouter,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Network router",
                    description: "IP ThingNetwork router providing access to other IP networks",
                },
            },
            ClassEntry {
                name: "ThingNetSwitch",
                id: ThingNetSwitch,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Network switch",
                    description: "Network switch to connect computer devices to the network",
                },
            },
            ClassEntry {
                name: "ThingNetWifi",
                id: ThingNetWifi,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Wifi device",
                    description: "Generic wifi device",
                },
            },
            ClassEntry {
                name: "ThingNetWifiAp",
                id: ThingNetWifiAp,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Wifi access point",
                    description: "Wireless access point for IP networks",
                },
            },
            ClassEntry {
                name: "ThingSensor",
                id: ThingSensor,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Sensor",
                    description: "Generic sensor device",
                },
            },
            ClassEntry {
                name: "ThingSensorEnvironment",
                id: ThingSensorEnvironment,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Environmental sensor",
                    description: "Environmental sensor with one or more features such as temperature, humidity, etc",
                },
            },
            ClassEntry {
                name: "ThingSensorInput",
                id: ThingSensorInput,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Input sensor",
                    description: "General purpose electrical input sensor",
                },
            },
            ClassEntry {
                name: "ThingSensorMulti",
                id: ThingSensorMulti,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Multi sensor",
                    description: "Sense multiple inputs",
                },
            },
            ClassEntry {
                name: "ThingSensorScale",
                id: ThingSensorScale,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Scale",
                    description: "Electronic weigh scale",
                },
            },
            ClassEntry {
                name: "ThingSensorSecurity",
                id: ThingSensorSecurity,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Security",
                    description: "Generic security sensor",
                },
            },
            ClassEntry {
                name: "ThingSensorSecurityDoorWindow",
                id: ThingSensorSecurityDoorWindow,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Door/Window sensor",
                    description: "Dedicated door/window opening security sensor",
                },
            },
            ClassEntry {
                name: "ThingSensorSecurityGlass",
                id: ThingSensorSecurityGlass,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Glass sensor",
                    description: "Dedicated sensor for detecting breaking of glass",
                },
            },
            ClassEntry {
                name: "ThingSensorSecurityMotion",
                id: ThingSensorSecurityMotion,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Motion sensor",
                    description: "Dedicated security sensor detecting motion",
                },
            },
            ClassEntry {
                name: "ThingSensorSmoke",
                id: ThingSensorSmoke,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Smoke detector",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingSensorSound",
                id: ThingSensorSound,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Sound detector",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingSensorThermometer",
                id: ThingSensorThermometer,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Thermometer",
                    description: "Environmental thermometer",
                },
            },
            ClassEntry {
                name: "ThingSensorWaterLeak",
                id: ThingSensorWaterLeak,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Water leak detector",
                    description: "Dedicated water leak detector",
                },
            },
            ClassEntry {
                name: "ThingService",
                id: ThingService,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Service",
                    description: "General service for processing data and offering features of interest",
                },
            },
            ClassEntry {
                name: "ThingServiceAdapter",
                id: ThingServiceAdapter,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Protocol adapter",
                    description: "Protocol adapter/binding for integration with another protocol",
                },
            },
            ClassEntry {
                name: "ThingServiceAuth",
                id: ThingServiceAuth,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Authentication service",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingServiceAutomation",
                id: ThingServiceAutomation,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Automation service",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingServiceDirectory",
                id: ThingServiceDirectory,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Directory service",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingServiceHistory",
                id: ThingServiceHistory,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "History service",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingServiceImage",
                id: ThingServiceImage,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Image classification",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingServiceSTT",
                id: ThingServiceSTT,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Speech to text",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingServiceStore",
                id: ThingServiceStore,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Data storage",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingServiceTTS",
                id: ThingServiceTTS,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Text to speech",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingServiceTranslation",
                id: ThingServiceTranslation,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Language translation service",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingServiceWeather",
                id: ThingServiceWeather,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Weather service",
                    description: "General weather service",
                },
            },
            ClassEntry {
                name: "ThingServiceWeatherCurrent",
                id: ThingServiceWeatherCurrent,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Current weather",
                    description: "",
                },
            },
            ClassEntry {
                name: "ThingServiceWeatherForecast",
                id: ThingServiceWeatherForecast,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Weather forecast",
                    description: "",
                },
            },
        ],
    },
    ClassTable {
        family: ClassFamily::Unit,
        name: "UnitClasses",
        version: "0.1",
        source: "github.com/hiveot/hub/api/vocab/ht-unit-classes.yaml",
        namespace: "ht",
        entries: &[
            ClassEntry {
                name: "UnitAmpere",
                id: UnitAmpere,
                descriptor: ClassDescriptor {
                    symbol: "A",
                    title: "Ampere",
                    description: "Electrical current in Amperes based on the elementary charge flow per second",
                },
            },
            ClassEntry {
                name: "UnitCandela",
                id: UnitCandela,
                descriptor: ClassDescriptor {
                    symbol: "cd",
                    title: "Candela",
                    description: "SI unit of luminous intensity in a given direction. Roughly the same brightness as the common candle.",
                },
            },
            ClassEntry {
                name: "UnitCelcius",
                id: UnitCelcius,
                descriptor: ClassDescriptor {
                    symbol: "C",
                    title: "Celcius",
                    description: "Temperature in Celcius",
                },
            },
            ClassEntry {
                name: "UnitCount",
                id: UnitCount,
                descriptor: ClassDescriptor {
                    symbol: "(N)",
                    title: "Count",
                    description: "",
                },
            },
            ClassEntry {
                name: "UnitDegree",
                id: UnitDegree,
                descriptor: ClassDescriptor {
                    symbol: "degree",
                    title: "Degree",
                    description: "Angle in 0-360 degrees",
                },
            },
            ClassEntry {
                name: "UnitFahrenheit",
                id: UnitFahrenheit,
                descriptor: ClassDescriptor {
                    symbol: "F",
                    title: "Fahrenheit",
                    description: "Temperature in Fahrenheit",
                },
            },
            ClassEntry {
                name: "UnitFoot",
                id: UnitFoot,
                descriptor: ClassDescriptor {
                    symbol: "ft",
                    title: "Foot",
                    description: "Imperial unit of distance. 1 foot equals 0.3048 meters",
                },
            },
            ClassEntry {
                name: "UnitGallon",
                id: UnitGallon,
                descriptor: ClassDescriptor {
                    symbol: "gl",
                    title: "Gallon",
                    description: "Unit of volume. 1 Imperial gallon is 4.54609 liters. 1 US liquid gallon is 3.78541 liters. 1 US dry gallon is 4.405 liters. ",
                },
            },
            ClassEntry {
                name: "UnitKelvin",
                id: UnitKelvin,
                descriptor: ClassDescriptor {
                    symbol: "K",
                    title: "Kelvin",
                    description: "SI unit of thermodynamic temperature. 0 K represents absolute zero, the absence of all heat. 0 C equals +273.15K",
                },
            },
            ClassEntry {
                name: "UnitKilogram",
                id: UnitKilogram,
                descriptor: ClassDescriptor {
                    symbol: "kg",
                    title: "Kilogram",
                    description: "",
                },
            },
            ClassEntry {
                name: "UnitKilometerPerHour",
                id: UnitKilometerPerHour,
                descriptor: ClassDescriptor {
                    symbol: "kph",
                    title: "Km per hour",
                    description: "Speed in kilometers per hour",
                },
            },
            ClassEntry {
                name: "UnitKilowattHour",
                id: UnitKilowattHour,
                descriptor: ClassDescriptor {
                    symbol: "kWh",
                    title: "Kilowatt-hour",
                    description: "non-SI unit of energy equivalent to 3.6 megajoules.",
                },
            },
            ClassEntry {
                name: "UnitLiter",
                id: UnitLiter,
                descriptor: ClassDescriptor {
                    symbol: "l",
                    title: "Liter",
                    description: "SI unit of volume equivalent to 1 cubic decimeter.",
                },
            },
            ClassEntry {
                name: "UnitLumen",
                id: UnitLumen,
                descriptor: ClassDescriptor {
                    symbol: "lm",
                    title: "Lumen",
                    description: "SI unit luminous flux. Measure of perceived power of visible light. 1lm = 1 cd steradian",
                },
            },
            ClassEntry {
                name: "UnitLux",
                id: UnitLux,
                descriptor: ClassDescriptor {
                    symbol: "lx",
                    title: "Lux",
                    description: "SI unit illuminance. Equal to 1 lumen per square meter.",
                },
            },
            ClassEntry {
                name: "UnitMercury",
                id: UnitMercury,
                descriptor: ClassDescriptor {
                    symbol: "Hg",
                    title: "Mercury",
                    description: "Unit of atmospheric pressure in the United States. 1 Hg equals 33.8639 mbar.",
                },
            },
            ClassEntry {
                name: "UnitMeter",
                id: UnitMeter,
                descriptor: ClassDescriptor {
                    symbol: "m",
                    title: "Meter",
                    description: "Distance in meters. 1m=c/299792458",
                },
            },
            ClassEntry {
                name: "UnitMeterPerSecond",
                id: UnitMeterPerSecond,
                descriptor: ClassDescriptor {
                    symbol: "m/s",
                    title: "Meters per second",
                    description: "SI unit of speed in meters per second",
                },
            },
            ClassEntry {
                name: "UnitMilesPerHour",
                id: UnitMilesPerHour,
                descriptor: ClassDescriptor {
                    symbol: "mph",
                    title: "Miles per hour",
                    description: "Speed in miles per hour",
                },
            },
            ClassEntry {
                name: "UnitMilliSecond",
                id: UnitMilliSecond,
                descriptor: ClassDescriptor {
                    symbol: "ms",
                    title: "millisecond",
                    description: "Unit of time in milli-seconds. Equal to 1/1000 of a second.",
                },
            },
            ClassEntry {
                name: "UnitMillibar",
                id: UnitMillibar,
                descriptor: ClassDescriptor {
                    symbol: "mbar",
                    title: "millibar",
                    description: "Metric unit of pressure. 1/1000th of a bar. Equal to 100 pascals. Amount of force it takes to move an object weighing a gram, one centimeter in one second.",
                },
            },
            ClassEntry {
                name: "UnitMole",
                id: UnitMole,
                descriptor: ClassDescriptor {
                    symbol: "mol",
                    title: "Mole",
                    description: "SI unit of measurement for amount of substance. Eg, molecules.",
                },
            },
            ClassEntry {
                name: "UnitPSI",
                id: UnitPSI,
                descriptor: ClassDescriptor {
                    symbol: "PSI",
                    title: "PSI",
                    description: "Unit of pressure. Pounds of force per square inch. 1PSI equals 6984 Pascals.",
                },
            },
            ClassEntry {
                name: "UnitPascal",
                id: UnitPascal,
                descriptor: ClassDescriptor {
                    symbol: "Pa",
                    title: "Pascal",
                    description: "SI unit of pressure. Equal to 1 newton of force applied over 1 square meter.",
                },
            },
            ClassEntry {
                name: "UnitPercent",
                id: UnitPercent,
                descriptor: ClassDescriptor {
                    symbol: "%",
                    title: "Percent",
                    description: "Fractions of 100",
                },
            },
            ClassEntry {
                name: "UnitPound",
                id: UnitPound,
                descriptor: ClassDescriptor {
                    symbol: "lbs",
                    title: "Pound",
                    description: "Imperial unit of weight. Equivalent to 0.453592 Kg. 1 Kg is 2.205 lbs",
                },
            },
            ClassEntry {
                name: "UnitPpm",
                id: UnitPpm,
                descriptor: ClassDescriptor {
                    symbol: "ppm",
                    title: "PPM",
                    description: "Parts per million",
                },
            },
            ClassEntry {
                name: "UnitRadian",
                id: UnitRadian,
                descriptor: ClassDescriptor {
                    symbol: "",
                    title: "Radian",
                    description: "Angle in 0-2pi",
                },
            },
            ClassEntry {
                name: "UnitSecond",
                id: UnitSecond,
                descriptor: ClassDescriptor {
                    symbol: "s",
                    title: "Second",
                    description: "SI unit of time based on caesium frequency",
                },
            },
            ClassEntry {
                name: "UnitVolt",
                id: UnitVolt,
                descriptor: ClassDescriptor {
                    symbol: "V",
                    title: "Volt",
                    description: "SI unit of electric potential; Energy consumption of 1 joule per electric charge of one coulomb",
                },
            },
            ClassEntry {
                name: "UnitWatt",
                id: UnitWatt,
                descriptor: ClassDescriptor {
                    symbol: "W",
                    title: "Watt",
                    description: "SI unit of power. Equal to 1 joule per second; or work performed when a current of 1 ampere flows across an electric potential of one volt.",
                },
            },
        ],
    },
];
